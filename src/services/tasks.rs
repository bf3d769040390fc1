use jiff::Timestamp;
use jiff::civil::Date;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{
    ids::{AssignmentId, ProjectId, TaskId},
    store::Store,
    task::{Comment, Task},
};
use crate::services::assignments;

#[derive(Debug, Error)]
pub enum CreateTaskError {
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),
}

pub struct CreateTaskParameters {
    pub project: ProjectId,
    pub title: String,
    /// Sub-item labels; uniqueness is the caller's responsibility
    pub items: Vec<String>,
    /// Marks the task pre-completed, with every sub-item already finished
    pub is_done: bool,
    pub deadline: Option<Date>,
}

/// Creates a task against a project.
///
/// Appending to the parent's task list is the last step, so a failure never
/// leaves an unregistered task behind.
pub fn create_task(
    store: &mut Store,
    parameters: CreateTaskParameters,
) -> Result<TaskId, CreateTaskError> {
    if store.get_project(parameters.project).is_none() {
        return Err(CreateTaskError::ProjectNotFound(parameters.project));
    }

    let task = Task::new(
        parameters.project,
        parameters.title,
        parameters.items,
        parameters.is_done,
        parameters.deadline,
    );
    let task_id = store.add_task(task);

    if let Some(project) = store.get_project_mut(parameters.project) {
        project.task_list.push(task_id);
    }

    debug!(task = %task_id, project = %parameters.project, "task created");

    Ok(task_id)
}

#[derive(Debug, Error)]
pub enum ImplementItemError {
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),

    #[error("Item '{0}' was not found in the item list")]
    ItemNotFound(String),

    #[error("Item '{0}' was already implemented")]
    AlreadyImplemented(String),
}

/// Marks one sub-item of a task as implemented.
///
/// When the last sub-item lands, the task becomes done, its id is removed
/// from the parent project's task list, and the status of every assignment
/// holding the task is refreshed.
pub fn implement_item(
    store: &mut Store,
    task_id: TaskId,
    item: &str,
) -> Result<(), ImplementItemError> {
    let task = store
        .get_task_mut(task_id)
        .ok_or(ImplementItemError::TaskNotFound(task_id))?;

    if !task.items.iter().any(|label| label == item) {
        return Err(ImplementItemError::ItemNotFound(item.to_string()));
    }
    if task.finished_items.iter().any(|label| label == item) {
        return Err(ImplementItemError::AlreadyImplemented(item.to_string()));
    }

    task.finished_items.push(item.to_string());
    if !task.all_items_finished() {
        return Ok(());
    }

    task.is_done = true;
    let parent_project = task.parent_project;

    // Removal from the parent list is by id, never by position or title, so
    // same-titled tasks are unaffected
    if let Some(project) = store.get_project_mut(parent_project) {
        project.task_list.retain(|id| *id != task_id);
    }

    // Completion changes the percentage of every assignment holding this task
    let affected: Vec<AssignmentId> = store
        .assignments
        .iter()
        .filter(|assignment| assignment.received_tasks.contains(&task_id))
        .map(|assignment| assignment.id)
        .collect();
    for assignment_id in affected {
        assignments::recompute_status(store, assignment_id);
    }

    info!(task = %task_id, project = %parent_project, "task completed");

    Ok(())
}

#[derive(Debug, Error)]
pub enum AddCommentError {
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),
}

/// Appends a timestamped comment to a task. The log is never truncated.
pub fn add_comment(store: &mut Store, task_id: TaskId, text: &str) -> Result<(), AddCommentError> {
    let task = store
        .get_task_mut(task_id)
        .ok_or(AddCommentError::TaskNotFound(task_id))?;

    task.comments.push(Comment {
        at: Timestamp::now(),
        text: text.to_string(),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Project;

    fn project(store: &mut Store) -> ProjectId {
        store.add_project(Project::new(String::from("Rover"), None, 5))
    }

    fn task_with_items(store: &mut Store, project_id: ProjectId, items: &[&str]) -> TaskId {
        create_task(
            store,
            CreateTaskParameters {
                project: project_id,
                title: String::from("Write parser"),
                items: items.iter().map(|item| item.to_string()).collect(),
                is_done: false,
                deadline: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_create_task_registers_on_the_parent() {
        let mut store = Store::new();
        let project_id = project(&mut store);

        let task_id = task_with_items(&mut store, project_id, &["a"]);

        assert_eq!(store.get_project(project_id).unwrap().task_list, vec![task_id]);
        assert_eq!(store.get_task(task_id).unwrap().parent_project, project_id);
    }

    #[test]
    fn test_create_task_against_missing_project_fails() {
        let mut store = Store::new();

        let result = create_task(
            &mut store,
            CreateTaskParameters {
                project: ProjectId(42),
                title: String::from("Orphan"),
                items: vec![],
                is_done: false,
                deadline: None,
            },
        );

        match result {
            Err(CreateTaskError::ProjectNotFound(ProjectId(42))) => {}
            _ => panic!("Expected ProjectNotFound error"),
        }
        assert!(store.tasks.is_empty());
    }

    #[test]
    fn test_task_is_done_once_every_item_is_implemented() {
        let mut store = Store::new();
        let project_id = project(&mut store);
        let task_id = task_with_items(&mut store, project_id, &["a", "b"]);

        implement_item(&mut store, task_id, "a").unwrap();
        assert!(!store.get_task(task_id).unwrap().is_done);

        implement_item(&mut store, task_id, "b").unwrap();
        let task = store.get_task(task_id).unwrap();
        assert!(task.is_done);
        assert_eq!(task.finished_items, task.items);
        // Done tasks leave the parent's task list
        assert!(store.get_project(project_id).unwrap().task_list.is_empty());
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut store = Store::new();
        let project_id = project(&mut store);
        let task_id = task_with_items(&mut store, project_id, &["a"]);

        match implement_item(&mut store, task_id, "z") {
            Err(ImplementItemError::ItemNotFound(item)) => assert_eq!(item, "z"),
            _ => panic!("Expected ItemNotFound error"),
        }
    }

    #[test]
    fn test_reimplementing_an_item_fails_without_duplicating_it() {
        let mut store = Store::new();
        let project_id = project(&mut store);
        let task_id = task_with_items(&mut store, project_id, &["a", "b"]);

        implement_item(&mut store, task_id, "a").unwrap();
        match implement_item(&mut store, task_id, "a") {
            Err(ImplementItemError::AlreadyImplemented(item)) => assert_eq!(item, "a"),
            _ => panic!("Expected AlreadyImplemented error"),
        }
        assert_eq!(store.get_task(task_id).unwrap().finished_items, vec!["a"]);
    }

    #[test]
    fn test_completion_removes_exactly_the_completed_task() {
        let mut store = Store::new();
        let project_id = project(&mut store);
        // Two tasks with identical titles and items; only ids tell them apart
        let first = task_with_items(&mut store, project_id, &["a"]);
        let second = task_with_items(&mut store, project_id, &["a"]);

        implement_item(&mut store, first, "a").unwrap();

        assert_eq!(store.get_project(project_id).unwrap().task_list, vec![second]);
        assert!(!store.get_task(second).unwrap().is_done);
    }

    #[test]
    fn test_comments_accumulate() {
        let mut store = Store::new();
        let project_id = project(&mut store);
        let task_id = task_with_items(&mut store, project_id, &["a"]);

        add_comment(&mut store, task_id, "first").unwrap();
        add_comment(&mut store, task_id, "second").unwrap();

        let task = store.get_task(task_id).unwrap();
        assert_eq!(task.comments.len(), 2);
        assert_eq!(task.comments[0].text, "first");
        assert_eq!(task.comments[1].text, "second");
    }
}
