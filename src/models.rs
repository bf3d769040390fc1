pub mod assignment;
pub mod employee;
pub mod ids;
pub mod person;
pub mod project;
pub mod store;
pub mod task;
