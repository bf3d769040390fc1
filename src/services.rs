pub mod assignments;
pub mod people;
pub mod projects;
pub mod roster;
pub mod tasks;
