use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::ids::{EmployeeId, ProjectId, TaskId};

#[derive(Serialize, Deserialize, Clone)]
pub struct Project {
    /// Monotonic id of the project, assigned by the store
    pub id: ProjectId,
    /// Title of the project
    pub title: String,
    /// Start date of the project, if scheduled
    pub start_date: Option<Date>,
    /// Maximum roster size; a zero or negative limit makes the project unjoinable
    pub limit: i64,
    /// Tasks registered on the project; completed tasks are removed
    pub task_list: Vec<TaskId>,
    /// Employees attached to the project, unique, in join order
    pub roster: Vec<EmployeeId>,
}

impl Project {
    /// Every construction gets fresh empty roster and task containers.
    pub fn new(title: String, start_date: Option<Date>, limit: i64) -> Project {
        Project {
            id: ProjectId::default(),
            title,
            start_date,
            limit,
            task_list: vec![],
            roster: vec![],
        }
    }

    /// Whether the roster currently has room for one more employee.
    pub fn has_room(&self) -> bool {
        (self.roster.len() as i64) < self.limit
    }
}
