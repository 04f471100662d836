//! Reference record queries

use std::sync::Arc;

use helpdesk_domain::{
    Client, ClientId, Department, DepartmentId, Employee, EmployeeId, HelpdeskError, Result,
};

use super::ports::{ClientRepository, DepartmentRepository, EmployeeRepository};

/// Read-side service over the directory of clients, employees and departments
pub struct DirectoryService {
    clients: Arc<dyn ClientRepository>,
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl DirectoryService {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self { clients, employees, departments }
    }

    /// Clients sorted by name.
    pub fn clients(&self) -> Result<Vec<Client>> {
        let mut clients = self.clients.list_clients()?;
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    pub fn client(&self, id: &ClientId) -> Result<Client> {
        self.clients.find_client(id)?.ok_or_else(|| HelpdeskError::not_found("client", id))
    }

    /// Employees sorted by full name. Inactive employees are skipped unless
    /// `include_inactive` is set.
    pub fn employees(&self, include_inactive: bool) -> Result<Vec<Employee>> {
        let mut employees: Vec<_> = self
            .employees
            .list_employees()?
            .into_iter()
            .filter(|e| include_inactive || e.is_active)
            .collect();
        employees.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(employees)
    }

    pub fn employee(&self, id: &EmployeeId) -> Result<Employee> {
        self.employees.find_employee(id)?.ok_or_else(|| HelpdeskError::not_found("employee", id))
    }

    pub fn departments(&self) -> Result<Vec<Department>> {
        let mut departments = self.departments.list_departments()?;
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    pub fn department(&self, id: &DepartmentId) -> Result<Department> {
        self.departments
            .find_department(id)?
            .ok_or_else(|| HelpdeskError::not_found("department", id))
    }
}
