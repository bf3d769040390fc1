use jiff::civil::Date;
use thiserror::Error;
use tracing::debug;

use crate::models::{ids::ProjectId, project::Project, store::Store};

#[derive(Debug, Error)]
pub enum CreateProjectError {
    #[error("Project title cannot be empty")]
    EmptyTitle,
}

pub struct CreateProjectParameters {
    pub title: String,
    pub start_date: Option<Date>,
    /// Maximum roster size; zero or negative leaves the project unjoinable
    pub limit: i64,
}

pub fn create_project(
    store: &mut Store,
    parameters: CreateProjectParameters,
) -> Result<ProjectId, CreateProjectError> {
    if parameters.title.trim().is_empty() {
        return Err(CreateProjectError::EmptyTitle);
    }

    let project = Project::new(parameters.title, parameters.start_date, parameters.limit);
    let project_id = store.add_project(project);

    debug!(project = %project_id, "project created");

    Ok(project_id)
}
