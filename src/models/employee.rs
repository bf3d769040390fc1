use serde::{Deserialize, Serialize};

use crate::models::ids::{EmployeeId, PersonId, ProjectId};

/// Things an employee is allowed to do.
///
/// A flat capability set replaces the role-per-type split (developer, project
/// manager, QA engineer) that would otherwise need one near-identical struct
/// per role.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Capability {
    ImplementFeatures,
    ReviewCode,
    FileTickets,
    DiscussProgress,
    RequestSickLeave,
}

impl Capability {
    pub fn developer_profile() -> Vec<Capability> {
        vec![
            Capability::ImplementFeatures,
            Capability::ReviewCode,
            Capability::RequestSickLeave,
        ]
    }

    pub fn project_manager_profile() -> Vec<Capability> {
        vec![
            Capability::DiscussProgress,
            Capability::FileTickets,
            Capability::RequestSickLeave,
        ]
    }

    pub fn qa_engineer_profile() -> Vec<Capability> {
        vec![
            Capability::FileTickets,
            Capability::RequestSickLeave,
        ]
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Employee {
    /// Monotonic id of the employee, assigned by the store
    pub id: EmployeeId,
    /// Personal record of the employee; the record may be referenced elsewhere
    pub person: PersonId,
    /// Capability set selected at registration
    pub capabilities: Vec<Capability>,
    /// Projects the employee is attached to, in join order
    pub projects: Vec<ProjectId>,
    /// Append-only log of requests addressed to this employee
    pub requests: Vec<String>,
}

impl Employee {
    pub fn new(person: PersonId, capabilities: Vec<Capability>) -> Employee {
        Employee {
            id: EmployeeId::default(),
            person,
            capabilities,
            projects: vec![],
            requests: vec![],
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}
