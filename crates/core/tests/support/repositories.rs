//! Mock repository implementations for testing
//!
//! One in-memory store implements every core port, enabling deterministic
//! service tests without the infrastructure crate.

use parking_lot::RwLock;
use helpdesk_core::payroll::ports::Mutation;
use helpdesk_core::{
    ClientRepository, DepartmentRepository, EmployeeRepository, PayrollRepository,
    TicketRepository, WorkTypeRepository,
};
use helpdesk_domain::{
    Client, ClientId, Department, DepartmentId, Employee, EmployeeId, HelpdeskError, PayrollSheet,
    PayrollSheetId, Result as DomainResult, Ticket, TicketId, WorkType, WorkTypeId,
};

/// In-memory mock for all ports.
#[derive(Default)]
pub struct MockStore {
    pub tickets: RwLock<Vec<Ticket>>,
    pub clients: RwLock<Vec<Client>>,
    pub employees: RwLock<Vec<Employee>>,
    pub departments: RwLock<Vec<Department>>,
    pub work_types: RwLock<Vec<WorkType>>,
    pub sheets: RwLock<Vec<PayrollSheet>>,
}

impl MockStore {
    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.tickets.write().push(ticket);
        self
    }

    pub fn with_client(self, client: Client) -> Self {
        self.clients.write().push(client);
        self
    }

    pub fn with_employee(self, employee: Employee) -> Self {
        self.employees.write().push(employee);
        self
    }

    pub fn with_department(self, department: Department) -> Self {
        self.departments.write().push(department);
        self
    }

    pub fn with_work_type(self, work_type: WorkType) -> Self {
        self.work_types.write().push(work_type);
        self
    }
}

impl TicketRepository for MockStore {
    fn list_tickets(&self) -> DomainResult<Vec<Ticket>> {
        Ok(self.tickets.read().clone())
    }

    fn find_ticket(&self, id: &TicketId) -> DomainResult<Option<Ticket>> {
        Ok(self.tickets.read().iter().find(|t| &t.id == id).cloned())
    }
}

impl ClientRepository for MockStore {
    fn list_clients(&self) -> DomainResult<Vec<Client>> {
        Ok(self.clients.read().clone())
    }

    fn find_client(&self, id: &ClientId) -> DomainResult<Option<Client>> {
        Ok(self.clients.read().iter().find(|c| &c.id == id).cloned())
    }
}

impl EmployeeRepository for MockStore {
    fn list_employees(&self) -> DomainResult<Vec<Employee>> {
        Ok(self.employees.read().clone())
    }

    fn find_employee(&self, id: &EmployeeId) -> DomainResult<Option<Employee>> {
        Ok(self.employees.read().iter().find(|e| &e.id == id).cloned())
    }
}

impl DepartmentRepository for MockStore {
    fn list_departments(&self) -> DomainResult<Vec<Department>> {
        Ok(self.departments.read().clone())
    }

    fn find_department(&self, id: &DepartmentId) -> DomainResult<Option<Department>> {
        Ok(self.departments.read().iter().find(|d| &d.id == id).cloned())
    }
}

impl WorkTypeRepository for MockStore {
    fn list_work_types(&self) -> DomainResult<Vec<WorkType>> {
        Ok(self.work_types.read().clone())
    }

    fn find_work_type(&self, id: &WorkTypeId) -> DomainResult<Option<WorkType>> {
        Ok(self.work_types.read().iter().find(|w| &w.id == id).cloned())
    }

    fn update_work_type(
        &self,
        id: &WorkTypeId,
        mutation: Mutation<'_, WorkType>,
    ) -> DomainResult<WorkType> {
        let mut work_types = self.work_types.write();
        let slot = work_types
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| HelpdeskError::not_found("work type", id))?;
        let mut draft = slot.clone();
        mutation(&mut draft)?;
        *slot = draft.clone();
        Ok(draft)
    }
}

impl PayrollRepository for MockStore {
    fn list_sheets(&self) -> DomainResult<Vec<PayrollSheet>> {
        Ok(self.sheets.read().clone())
    }

    fn find_sheet(&self, id: &PayrollSheetId) -> DomainResult<Option<PayrollSheet>> {
        Ok(self.sheets.read().iter().find(|s| s.id() == id).cloned())
    }

    fn insert_sheet(&self, sheet: PayrollSheet) -> DomainResult<()> {
        let mut sheets = self.sheets.write();
        if sheets.iter().any(|s| s.id() == sheet.id()) {
            return Err(HelpdeskError::Validation(format!("duplicate sheet {}", sheet.id())));
        }
        sheets.push(sheet);
        Ok(())
    }

    fn update_sheet(
        &self,
        id: &PayrollSheetId,
        mutation: Mutation<'_, PayrollSheet>,
    ) -> DomainResult<PayrollSheet> {
        let mut sheets = self.sheets.write();
        let slot = sheets
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| HelpdeskError::not_found("payroll sheet", id))?;
        let mut draft = slot.clone();
        mutation(&mut draft)?;
        *slot = draft.clone();
        Ok(draft)
    }
}
