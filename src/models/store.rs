use serde::{Deserialize, Serialize};

use crate::models::{
    assignment::Assignment,
    employee::Employee,
    ids::{AssignmentId, EmployeeId, PersonId, ProjectId, TaskId},
    person::PersonRecord,
    project::Project,
    task::Task,
};

/// Owning arena for every entity in the system.
///
/// All cross-entity references are ids into these vectors. The id counters
/// live here so they are initialized exactly once, when the store is built,
/// and are never reset or reused afterwards.
#[derive(Serialize, Deserialize, Default)]
pub struct Store {
    pub people: Vec<PersonRecord>,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub assignments: Vec<Assignment>,
    next_person_id: u64,
    next_employee_id: u64,
    next_project_id: u64,
    next_task_id: u64,
    next_assignment_id: u64,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    /// Adds a record, assigning the next person id.
    pub fn add_person(&mut self, mut person: PersonRecord) -> PersonId {
        let id = PersonId(self.next_person_id);
        self.next_person_id += 1;
        person.id = id;
        self.people.push(person);
        id
    }

    /// Adds an employee, assigning the next employee id.
    pub fn add_employee(&mut self, mut employee: Employee) -> EmployeeId {
        let id = EmployeeId(self.next_employee_id);
        self.next_employee_id += 1;
        employee.id = id;
        self.employees.push(employee);
        id
    }

    /// Adds a project, assigning the next project id.
    pub fn add_project(&mut self, mut project: Project) -> ProjectId {
        let id = ProjectId(self.next_project_id);
        self.next_project_id += 1;
        project.id = id;
        self.projects.push(project);
        id
    }

    /// Adds a task, assigning the next task id. Registration on the parent
    /// project's task list is the caller's job.
    pub fn add_task(&mut self, mut task: Task) -> TaskId {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        task.id = id;
        self.tasks.push(task);
        id
    }

    /// Adds an assignment, assigning the next assignment id.
    pub fn add_assignment(&mut self, mut assignment: Assignment) -> AssignmentId {
        let id = AssignmentId(self.next_assignment_id);
        self.next_assignment_id += 1;
        assignment.id = id;
        self.assignments.push(assignment);
        id
    }

    pub fn get_person(&self, id: PersonId) -> Option<&PersonRecord> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn get_employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn get_employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == id)
    }

    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn get_project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn get_assignment(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|assignment| assignment.id == id)
    }

    pub fn get_assignment_mut(&mut self, id: AssignmentId) -> Option<&mut Assignment> {
        self.assignments
            .iter_mut()
            .find(|assignment| assignment.id == id)
    }
}
