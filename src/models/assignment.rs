use serde::{Deserialize, Serialize};

use crate::models::ids::{AssignmentId, EmployeeId, ProjectId, TaskId};

#[derive(Serialize, Deserialize, Clone)]
pub struct Assignment {
    /// Monotonic id of the assignment, assigned by the store
    pub id: AssignmentId,
    /// The project the assigned tasks come from
    pub parent_project: ProjectId,
    /// The assignee
    pub employee: EmployeeId,
    /// Description of the assignment
    pub description: String,
    /// Completion percentage over the received tasks, e.g. "50%"
    pub status: String,
    /// Whether every received task is done
    pub is_done: bool,
    /// Tasks accepted into this assignment, in the order they were added
    pub received_tasks: Vec<TaskId>,
}

impl Assignment {
    pub fn new(parent_project: ProjectId, employee: EmployeeId, description: String) -> Assignment {
        Assignment {
            id: AssignmentId::default(),
            parent_project,
            employee,
            description,
            status: String::from("0%"),
            is_done: false,
            received_tasks: vec![],
        }
    }
}
