use std::fmt;

use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::ids::{ProjectId, TaskId};

#[derive(Serialize, Deserialize, Clone)]
pub struct Task {
    /// Monotonic id of the task, assigned by the store
    pub id: TaskId,
    /// Title of the task
    pub title: String,
    /// Sub-items that must each be implemented; label uniqueness is up to the caller
    pub items: Vec<String>,
    /// Deadline for this task
    pub deadline: Option<Date>,
    /// Whether every sub-item has been implemented
    pub is_done: bool,
    /// Append-only comment log
    pub comments: Vec<Comment>,
    /// Implemented sub-items, always a subset of `items`
    pub finished_items: Vec<String>,
    /// The project this task was registered on
    pub parent_project: ProjectId,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Comment {
    /// When the comment was added
    pub at: Timestamp,
    /// Comment text
    pub text: String,
}

impl Task {
    /// Builds a task with a placeholder id; the store assigns the real one.
    ///
    /// A task constructed already-done starts with every sub-item finished.
    pub fn new(
        parent_project: ProjectId,
        title: String,
        items: Vec<String>,
        is_done: bool,
        deadline: Option<Date>,
    ) -> Task {
        let finished_items = if is_done { items.clone() } else { vec![] };
        Task {
            id: TaskId::default(),
            title,
            items,
            deadline,
            is_done,
            comments: vec![],
            finished_items,
            parent_project,
        }
    }

    pub fn all_items_finished(&self) -> bool {
        self.items
            .iter()
            .all(|item| self.finished_items.contains(item))
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at.strftime("%d/%m/%Y %H:%M:%S"), self.text)
    }
}
