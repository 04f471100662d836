//! Port interfaces for reference records
//!
//! Lookups return `Ok(None)` for unknown identifiers; deciding whether a
//! missing record is an error belongs to the caller.

use helpdesk_domain::{Client, ClientId, Department, DepartmentId, Employee, EmployeeId, Result};

/// Read access to clients
pub trait ClientRepository: Send + Sync {
    fn list_clients(&self) -> Result<Vec<Client>>;

    fn find_client(&self, id: &ClientId) -> Result<Option<Client>>;
}

/// Read access to employees
pub trait EmployeeRepository: Send + Sync {
    fn list_employees(&self) -> Result<Vec<Employee>>;

    fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>>;
}

/// Read access to departments
pub trait DepartmentRepository: Send + Sync {
    fn list_departments(&self) -> Result<Vec<Department>>;

    fn find_department(&self, id: &DepartmentId) -> Result<Option<Department>>;
}
