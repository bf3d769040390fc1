use thiserror::Error;
use tracing::info;

use crate::models::{
    ids::{EmployeeId, ProjectId},
    project::Project,
    store::Store,
};

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Developer limit of project '{0}' is exceeded")]
    LimitExceeded(String),

    #[error("Employee {1} is already on the roster of project '{0}'")]
    AlreadyOnRoster(String, EmployeeId),
}

/// Attaches an employee to a project's roster and mirrors the link on the
/// employee's own project list.
///
/// Every check runs before the first mutation, so a failure never leaves a
/// half-linked roster behind.
pub fn attach(
    store: &mut Store,
    project_id: ProjectId,
    employee_id: EmployeeId,
) -> Result<(), AttachError> {
    let project = store
        .get_project(project_id)
        .ok_or(AttachError::ProjectNotFound(project_id))?;
    if store.get_employee(employee_id).is_none() {
        return Err(AttachError::EmployeeNotFound(employee_id));
    }

    // A zero or negative limit always fails here
    if project.roster.len() as i64 >= project.limit {
        return Err(AttachError::LimitExceeded(project.title.clone()));
    }
    if project.roster.contains(&employee_id) {
        return Err(AttachError::AlreadyOnRoster(project.title.clone(), employee_id));
    }

    if let Some(project) = store.get_project_mut(project_id) {
        project.roster.push(employee_id);
    }
    if let Some(employee) = store.get_employee_mut(employee_id) {
        employee.projects.push(project_id);
    }

    info!(project = %project_id, employee = %employee_id, "employee attached");

    Ok(())
}

#[derive(Debug, Error)]
pub enum DetachError {
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Employee {1} was not found on project {0}")]
    NotOnRoster(ProjectId, EmployeeId),
}

/// Removes an employee from a project's roster and the project from the
/// employee's project list.
///
/// Both memberships are verified up front; if either side of the link is
/// missing the whole operation fails and nothing is removed.
pub fn detach(
    store: &mut Store,
    project_id: ProjectId,
    employee_id: EmployeeId,
) -> Result<(), DetachError> {
    let project = store
        .get_project(project_id)
        .ok_or(DetachError::ProjectNotFound(project_id))?;
    let employee = store
        .get_employee(employee_id)
        .ok_or(DetachError::EmployeeNotFound(employee_id))?;

    let roster_position = project
        .roster
        .iter()
        .position(|id| *id == employee_id)
        .ok_or(DetachError::NotOnRoster(project_id, employee_id))?;
    let project_position = employee
        .projects
        .iter()
        .position(|id| *id == project_id)
        .ok_or(DetachError::NotOnRoster(project_id, employee_id))?;

    if let Some(project) = store.get_project_mut(project_id) {
        project.roster.remove(roster_position);
    }
    if let Some(employee) = store.get_employee_mut(employee_id) {
        employee.projects.remove(project_position);
    }

    info!(project = %project_id, employee = %employee_id, "employee detached");

    Ok(())
}

/// Whether the project currently has room for one more employee.
pub fn can_attach(store: &Store, project_id: ProjectId) -> bool {
    store.get_project(project_id).is_some_and(Project::has_room)
}
