//! In-memory entity store
//!
//! Single process-wide store implementing every core repository port. Each
//! collection sits behind its own `parking_lot::RwLock`, so readers never
//! block each other and a mutation is visible to other handlers only once
//! it has been committed in full.

use std::collections::BTreeMap;

use helpdesk_core::payroll::ports::Mutation;
use helpdesk_core::{
    ClientRepository, DepartmentRepository, EmployeeRepository, PayrollRepository,
    TicketRepository, WorkTypeRepository,
};
use helpdesk_domain::{
    Client, ClientId, Department, DepartmentId, Employee, EmployeeId, HelpdeskError, PayrollSheet,
    PayrollSheetId, Result, Ticket, TicketId, WorkType, WorkTypeId,
};
use parking_lot::RwLock;
use tracing::debug;

/// Entity collections keyed by identifier
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tickets: RwLock<BTreeMap<TicketId, Ticket>>,
    clients: RwLock<BTreeMap<ClientId, Client>>,
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
    departments: RwLock<BTreeMap<DepartmentId, Department>>,
    work_types: RwLock<BTreeMap<WorkTypeId, WorkType>>,
    sheets: RwLock<BTreeMap<PayrollSheetId, PayrollSheet>>,
}

/// Snapshot of record counts, used for health reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub tickets: usize,
    pub clients: usize,
    pub employees: usize,
    pub departments: usize,
    pub work_types: usize,
    pub payroll_sheets: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ticket(&self, ticket: Ticket) {
        self.tickets.write().insert(ticket.id.clone(), ticket);
    }

    pub fn insert_client(&self, client: Client) {
        self.clients.write().insert(client.id.clone(), client);
    }

    pub fn insert_employee(&self, employee: Employee) {
        self.employees.write().insert(employee.id.clone(), employee);
    }

    pub fn insert_department(&self, department: Department) {
        self.departments.write().insert(department.id.clone(), department);
    }

    pub fn insert_work_type(&self, work_type: WorkType) {
        self.work_types.write().insert(work_type.id.clone(), work_type);
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            tickets: self.tickets.read().len(),
            clients: self.clients.read().len(),
            employees: self.employees.read().len(),
            departments: self.departments.read().len(),
            work_types: self.work_types.read().len(),
            payroll_sheets: self.sheets.read().len(),
        }
    }
}

/// Run `mutation` against a copy of `slot`, committing only on success.
fn commit<T: Clone>(slot: &mut T, mutation: Mutation<'_, T>) -> Result<T> {
    let mut working = slot.clone();
    mutation(&mut working)?;
    *slot = working.clone();
    Ok(working)
}

/* -------------------------------------------------------------------------- */
/* Read-only ports */
/* -------------------------------------------------------------------------- */

impl TicketRepository for InMemoryStore {
    fn list_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.read().values().cloned().collect())
    }

    fn find_ticket(&self, id: &TicketId) -> Result<Option<Ticket>> {
        Ok(self.tickets.read().get(id).cloned())
    }
}

impl ClientRepository for InMemoryStore {
    fn list_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.read().values().cloned().collect())
    }

    fn find_client(&self, id: &ClientId) -> Result<Option<Client>> {
        Ok(self.clients.read().get(id).cloned())
    }
}

impl EmployeeRepository for InMemoryStore {
    fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.read().values().cloned().collect())
    }

    fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        Ok(self.employees.read().get(id).cloned())
    }
}

impl DepartmentRepository for InMemoryStore {
    fn list_departments(&self) -> Result<Vec<Department>> {
        Ok(self.departments.read().values().cloned().collect())
    }

    fn find_department(&self, id: &DepartmentId) -> Result<Option<Department>> {
        Ok(self.departments.read().get(id).cloned())
    }
}

/* -------------------------------------------------------------------------- */
/* Mutable ports */
/* -------------------------------------------------------------------------- */

impl WorkTypeRepository for InMemoryStore {
    fn list_work_types(&self) -> Result<Vec<WorkType>> {
        Ok(self.work_types.read().values().cloned().collect())
    }

    fn find_work_type(&self, id: &WorkTypeId) -> Result<Option<WorkType>> {
        Ok(self.work_types.read().get(id).cloned())
    }

    fn update_work_type(&self, id: &WorkTypeId, mutation: Mutation<'_, WorkType>) -> Result<WorkType> {
        let mut work_types = self.work_types.write();
        let slot = work_types.get_mut(id).ok_or_else(|| HelpdeskError::not_found("work type", id))?;
        let updated = commit(slot, mutation)?;
        debug!(work_type_id = %id, "work_type_committed");
        Ok(updated)
    }
}

impl PayrollRepository for InMemoryStore {
    fn list_sheets(&self) -> Result<Vec<PayrollSheet>> {
        Ok(self.sheets.read().values().cloned().collect())
    }

    fn find_sheet(&self, id: &PayrollSheetId) -> Result<Option<PayrollSheet>> {
        Ok(self.sheets.read().get(id).cloned())
    }

    fn insert_sheet(&self, sheet: PayrollSheet) -> Result<()> {
        let mut sheets = self.sheets.write();
        if sheets.contains_key(sheet.id()) {
            return Err(HelpdeskError::Validation(format!(
                "payroll sheet '{}' already exists",
                sheet.id()
            )));
        }
        sheets.insert(sheet.id().clone(), sheet);
        Ok(())
    }

    fn update_sheet(
        &self,
        id: &PayrollSheetId,
        mutation: Mutation<'_, PayrollSheet>,
    ) -> Result<PayrollSheet> {
        let mut sheets = self.sheets.write();
        let slot = sheets.get_mut(id).ok_or_else(|| HelpdeskError::not_found("payroll sheet", id))?;
        let updated = commit(slot, mutation)?;
        debug!(sheet_id = %id, items = updated.items().len(), "payroll_sheet_committed");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use helpdesk_domain::{PayPeriod, PayrollStatus};
    use rust_decimal::Decimal;

    use super::*;

    fn sheet(id: &str) -> PayrollSheet {
        let period = PayPeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .unwrap();
        PayrollSheet::new(
            PayrollSheetId::new(id),
            EmployeeId::new("e-1"),
            period,
            Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_insert_sheet_rejects_duplicates() {
        let store = InMemoryStore::new();
        store.insert_sheet(sheet("ps-1")).unwrap();
        assert!(matches!(store.insert_sheet(sheet("ps-1")), Err(HelpdeskError::Validation(_))));
        assert_eq!(store.stats().payroll_sheets, 1);
    }

    #[test]
    fn test_failed_mutation_is_not_committed() {
        let store = InMemoryStore::new();
        store.insert_sheet(sheet("ps-1")).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        let result = store.update_sheet(&PayrollSheetId::new("ps-1"), &mut |s| {
            s.transition_status(PayrollStatus::Approved, now)?;
            Err(HelpdeskError::Internal("abort after partial change".into()))
        });
        assert!(result.is_err());

        let stored = store.find_sheet(&PayrollSheetId::new("ps-1")).unwrap().unwrap();
        assert_eq!(stored.status(), PayrollStatus::Draft);
    }

    #[test]
    fn test_update_unknown_work_type() {
        let store = InMemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let result = store
            .update_work_type(&WorkTypeId::new("missing"), &mut |w| w.reprice(Decimal::ONE, now));
        assert!(matches!(result, Err(HelpdeskError::NotFound(_))));
    }
}
