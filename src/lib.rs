//! In-memory staffing and task tracking for software projects.
//!
//! Entities (people, employees, projects, tasks, assignments) live in an
//! arena [`Store`](models::store::Store) and reference each other by id.
//! Operations on them live under [`services`], one error type per operation.

pub mod models;
pub mod services;
