use thiserror::Error;
use tracing::debug;

use crate::models::{
    employee::{Capability, Employee},
    ids::{EmployeeId, ProjectId},
    person::{PersonDetails, PersonRecord, PersonRecordError},
    store::Store,
};

#[derive(Debug, Error)]
pub enum RegisterEmployeeError {
    #[error("Invalid personal record: {0}")]
    InvalidRecord(#[from] PersonRecordError),
}

pub struct RegisterEmployeeParameters {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub position: String,
    pub rank: String,
    pub salary: f64,
    pub capabilities: Vec<Capability>,
}

/// Registers a person and the employee built on top of the record.
///
/// Record validation runs before anything is added, so a bad name or phone
/// number leaves the store untouched.
pub fn register_employee(
    store: &mut Store,
    parameters: RegisterEmployeeParameters,
) -> Result<EmployeeId, RegisterEmployeeError> {
    let person = PersonRecord::new(PersonDetails {
        full_name: parameters.full_name,
        address: parameters.address,
        phone_number: parameters.phone_number,
        email: parameters.email,
        position: parameters.position,
        rank: parameters.rank,
        salary: parameters.salary,
    })?;

    let person_id = store.add_person(person);
    let employee_id = store.add_employee(Employee::new(person_id, parameters.capabilities));

    debug!(employee = %employee_id, person = %person_id, "employee registered");

    Ok(employee_id)
}

#[derive(Debug, Error)]
pub enum RequestSickLeaveError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Employee {0} cannot request sick leave")]
    NotPermitted(EmployeeId),
}

/// Files a sick-leave request onto the manager's request log.
pub fn request_sick_leave(
    store: &mut Store,
    requester_id: EmployeeId,
    manager_id: EmployeeId,
) -> Result<(), RequestSickLeaveError> {
    let requester = store
        .get_employee(requester_id)
        .ok_or(RequestSickLeaveError::EmployeeNotFound(requester_id))?;
    if !requester.has_capability(Capability::RequestSickLeave) {
        return Err(RequestSickLeaveError::NotPermitted(requester_id));
    }
    if store.get_employee(manager_id).is_none() {
        return Err(RequestSickLeaveError::EmployeeNotFound(manager_id));
    }

    let requester_name = store
        .get_person(requester.person)
        .map(|person| person.first_name.clone())
        .unwrap_or_else(|| format!("Employee {requester_id}"));
    let request = format!("{requester_name} asks for sick leave");

    if let Some(manager) = store.get_employee_mut(manager_id) {
        manager.requests.push(request);
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum DiscussProgressError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("Employee {0} cannot discuss progress")]
    NotPermitted(EmployeeId),

    #[error("Employee {1} is not on the roster of project {0}")]
    NotOnRoster(ProjectId, EmployeeId),
}

/// A manager discusses progress with an engineer on one of their projects.
///
/// Pure query: verifies the capability and roster membership and returns a
/// description of the discussion.
pub fn discuss_progress(
    store: &Store,
    manager_id: EmployeeId,
    project_id: ProjectId,
    engineer_id: EmployeeId,
) -> Result<String, DiscussProgressError> {
    let manager = store
        .get_employee(manager_id)
        .ok_or(DiscussProgressError::EmployeeNotFound(manager_id))?;
    if !manager.has_capability(Capability::DiscussProgress) {
        return Err(DiscussProgressError::NotPermitted(manager_id));
    }

    let project = store
        .get_project(project_id)
        .ok_or(DiscussProgressError::ProjectNotFound(project_id))?;
    let engineer = store
        .get_employee(engineer_id)
        .ok_or(DiscussProgressError::EmployeeNotFound(engineer_id))?;
    if !project.roster.contains(&engineer_id) {
        return Err(DiscussProgressError::NotOnRoster(project_id, engineer_id));
    }

    let engineer_name = store
        .get_person(engineer.person)
        .map(PersonRecord::full_name)
        .unwrap_or_else(|| format!("Employee {engineer_id}"));

    Ok(format!("Discussed progress with {engineer_name}"))
}
