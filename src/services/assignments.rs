use jiff::civil::Date;
use thiserror::Error;
use tracing::debug;

use crate::models::{
    assignment::Assignment,
    ids::{AssignmentId, EmployeeId, ProjectId, TaskId},
    store::Store,
    task::Task,
};

#[derive(Debug, Error)]
pub enum CreateAssignmentError {
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),
}

pub struct CreateAssignmentParameters {
    pub project: ProjectId,
    pub employee: EmployeeId,
    pub description: String,
}

pub fn create_assignment(
    store: &mut Store,
    parameters: CreateAssignmentParameters,
) -> Result<AssignmentId, CreateAssignmentError> {
    if store.get_project(parameters.project).is_none() {
        return Err(CreateAssignmentError::ProjectNotFound(parameters.project));
    }
    if store.get_employee(parameters.employee).is_none() {
        return Err(CreateAssignmentError::EmployeeNotFound(parameters.employee));
    }

    let assignment = Assignment::new(
        parameters.project,
        parameters.employee,
        parameters.description,
    );
    let assignment_id = store.add_assignment(assignment);

    debug!(assignment = %assignment_id, project = %parameters.project, "assignment created");

    Ok(assignment_id)
}

#[derive(Debug, Error)]
pub enum AddTaskError {
    #[error("Assignment {0} not found")]
    AssignmentNotFound(AssignmentId),

    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("Assignment task list cannot be longer than the project task list ({0} tasks)")]
    TaskListExceeded(usize),
}

/// Accepts a task into an assignment and refreshes its status.
///
/// The capacity check is a snapshot against the project's current task-list
/// length; whether the task actually belongs to the project is not verified.
pub fn add_task(
    store: &mut Store,
    assignment_id: AssignmentId,
    task_id: TaskId,
) -> Result<(), AddTaskError> {
    let assignment = store
        .get_assignment(assignment_id)
        .ok_or(AddTaskError::AssignmentNotFound(assignment_id))?;
    let project = store
        .get_project(assignment.parent_project)
        .ok_or(AddTaskError::ProjectNotFound(assignment.parent_project))?;

    if assignment.received_tasks.len() >= project.task_list.len() {
        return Err(AddTaskError::TaskListExceeded(project.task_list.len()));
    }

    if let Some(assignment) = store.get_assignment_mut(assignment_id) {
        assignment.received_tasks.push(task_id);
    }
    recompute_status(store, assignment_id);

    debug!(assignment = %assignment_id, task = %task_id, "task assigned");

    Ok(())
}

#[derive(Debug, Error)]
pub enum RefreshStatusError {
    #[error("Assignment {0} not found")]
    AssignmentNotFound(AssignmentId),
}

/// Recomputes the status percentage and done flag of an assignment.
///
/// Runs automatically after `add_task` and after a contained task completes,
/// so the status never goes stale; callers may still invoke it directly.
pub fn refresh_status(
    store: &mut Store,
    assignment_id: AssignmentId,
) -> Result<(), RefreshStatusError> {
    if store.get_assignment(assignment_id).is_none() {
        return Err(RefreshStatusError::AssignmentNotFound(assignment_id));
    }
    recompute_status(store, assignment_id);
    Ok(())
}

/// Status is the share of done tasks among the received ones, floored to a
/// whole percent. An empty assignment keeps its previous status.
pub(crate) fn recompute_status(store: &mut Store, assignment_id: AssignmentId) {
    let Some(assignment) = store.get_assignment(assignment_id) else {
        return;
    };
    let total = assignment.received_tasks.len();
    if total == 0 {
        return;
    }

    let done = assignment
        .received_tasks
        .iter()
        .filter(|task_id| store.get_task(**task_id).is_some_and(|task| task.is_done))
        .count();
    let status = format!("{}%", done * 100 / total);

    if let Some(assignment) = store.get_assignment_mut(assignment_id) {
        assignment.status = status;
        assignment.is_done = done == total;
    }
}

#[derive(Debug, Error)]
pub enum TasksDueByError {
    #[error("Assignment {0} not found")]
    AssignmentNotFound(AssignmentId),
}

/// Received tasks with a deadline strictly before `date`, lazily, in
/// `received_tasks` order. Calling again restarts the walk.
pub fn tasks_due_by<'a>(
    store: &'a Store,
    assignment_id: AssignmentId,
    date: Date,
) -> Result<impl Iterator<Item = (Date, &'a Task)> + 'a, TasksDueByError> {
    let assignment = store
        .get_assignment(assignment_id)
        .ok_or(TasksDueByError::AssignmentNotFound(assignment_id))?;

    Ok(assignment.received_tasks.iter().filter_map(move |task_id| {
        let task = store.get_task(*task_id)?;
        let deadline = task.deadline?;
        (deadline < date).then_some((deadline, task))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::{Capability, Employee};
    use crate::models::person::{PersonDetails, PersonRecord};
    use crate::models::project::Project;
    use crate::services::tasks::{CreateTaskParameters, create_task, implement_item};

    fn hire(store: &mut Store) -> EmployeeId {
        let person = PersonRecord::new(PersonDetails {
            full_name: String::from("Dev One"),
            address: String::from("12 Example Street"),
            phone_number: String::from("+12345678"),
            email: String::from("dev@example.com"),
            position: String::from("Developer"),
            rank: String::from("Middle"),
            salary: 3000.0,
        })
        .unwrap();
        let person_id = store.add_person(person);
        store.add_employee(Employee::new(person_id, Capability::developer_profile()))
    }

    fn setup(store: &mut Store) -> (ProjectId, AssignmentId) {
        let project_id = store.add_project(Project::new(String::from("Rover"), None, 5));
        let employee_id = hire(store);
        let assignment_id = create_assignment(
            store,
            CreateAssignmentParameters {
                project: project_id,
                employee: employee_id,
                description: String::from("Parser work"),
            },
        )
        .unwrap();
        (project_id, assignment_id)
    }

    fn task(store: &mut Store, project_id: ProjectId, deadline: Option<Date>) -> TaskId {
        create_task(
            store,
            CreateTaskParameters {
                project: project_id,
                title: String::from("Write parser"),
                items: vec![String::from("a"), String::from("b")],
                is_done: false,
                deadline,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_assignment_starts_at_zero_percent() {
        let mut store = Store::new();
        let (_, assignment_id) = setup(&mut store);

        let assignment = store.get_assignment(assignment_id).unwrap();
        assert_eq!(assignment.status, "0%");
        assert!(!assignment.is_done);
        assert!(assignment.received_tasks.is_empty());
    }

    #[test]
    fn test_status_reflects_done_share_after_add_task() {
        let mut store = Store::new();
        let (project_id, assignment_id) = setup(&mut store);
        let pending = task(&mut store, project_id, None);
        let done = create_task(
            &mut store,
            CreateTaskParameters {
                project: project_id,
                title: String::from("Already shipped"),
                items: vec![String::from("x")],
                is_done: true,
                deadline: None,
            },
        )
        .unwrap();

        add_task(&mut store, assignment_id, pending).unwrap();
        assert_eq!(store.get_assignment(assignment_id).unwrap().status, "0%");

        add_task(&mut store, assignment_id, done).unwrap();
        assert_eq!(store.get_assignment(assignment_id).unwrap().status, "50%");
    }

    #[test]
    fn test_add_task_beyond_the_project_task_list_fails() {
        let mut store = Store::new();
        let (project_id, assignment_id) = setup(&mut store);
        let task_id = task(&mut store, project_id, None);

        add_task(&mut store, assignment_id, task_id).unwrap();

        // The project holds one task, so a second acceptance exceeds it
        match add_task(&mut store, assignment_id, task_id) {
            Err(AddTaskError::TaskListExceeded(1)) => {}
            _ => panic!("Expected TaskListExceeded error"),
        }
        assert_eq!(
            store.get_assignment(assignment_id).unwrap().received_tasks.len(),
            1
        );
    }

    #[test]
    fn test_completing_a_task_refreshes_the_assignment() {
        let mut store = Store::new();
        let (project_id, assignment_id) = setup(&mut store);
        let task_id = task(&mut store, project_id, None);
        add_task(&mut store, assignment_id, task_id).unwrap();

        implement_item(&mut store, task_id, "a").unwrap();
        assert_eq!(store.get_assignment(assignment_id).unwrap().status, "0%");

        implement_item(&mut store, task_id, "b").unwrap();
        let assignment = store.get_assignment(assignment_id).unwrap();
        assert_eq!(assignment.status, "100%");
        assert!(assignment.is_done);
    }

    #[test]
    fn test_refresh_status_can_be_called_directly() {
        let mut store = Store::new();
        let (project_id, assignment_id) = setup(&mut store);
        let task_id = task(&mut store, project_id, None);
        add_task(&mut store, assignment_id, task_id).unwrap();

        // Flip the task behind the assignment's back, then refresh
        store.get_task_mut(task_id).unwrap().is_done = true;
        refresh_status(&mut store, assignment_id).unwrap();
        assert_eq!(store.get_assignment(assignment_id).unwrap().status, "100%");

        match refresh_status(&mut store, AssignmentId(99)) {
            Err(RefreshStatusError::AssignmentNotFound(AssignmentId(99))) => {}
            _ => panic!("Expected AssignmentNotFound error"),
        }
    }

    #[test]
    fn test_tasks_due_by_keeps_only_earlier_deadlines() {
        let mut store = Store::new();
        let (project_id, assignment_id) = setup(&mut store);
        let near = Date::constant(2026, 9, 1);
        let far = Date::constant(2026, 12, 1);
        let early = task(&mut store, project_id, Some(near));
        let late = task(&mut store, project_id, Some(far));
        let undated = task(&mut store, project_id, None);
        for task_id in [early, late, undated] {
            add_task(&mut store, assignment_id, task_id).unwrap();
        }

        let cutoff = Date::constant(2026, 10, 1);
        let due: Vec<_> = tasks_due_by(&store, assignment_id, cutoff)
            .unwrap()
            .map(|(deadline, task)| (deadline, task.id))
            .collect();
        assert_eq!(due, vec![(near, early)]);

        // The walk restarts cleanly on a second call
        let again = tasks_due_by(&store, assignment_id, cutoff).unwrap().count();
        assert_eq!(again, 1);
    }

    #[test]
    fn test_deadline_equal_to_the_cutoff_is_not_due() {
        let mut store = Store::new();
        let (project_id, assignment_id) = setup(&mut store);
        let cutoff = Date::constant(2026, 10, 1);
        let task_id = task(&mut store, project_id, Some(cutoff));
        add_task(&mut store, assignment_id, task_id).unwrap();

        let due = tasks_due_by(&store, assignment_id, cutoff).unwrap().count();
        assert_eq!(due, 0);
    }
}
