//! Payroll use-cases
//!
//! Resolves employee, sheet and work type references through the store and
//! delegates the arithmetic and lifecycle rules to the domain types.

use std::sync::Arc;

use helpdesk_domain::{
    EmployeeId, HelpdeskError, PayPeriod, PayrollItemId, PayrollSheet, PayrollSheetId,
    PayrollStatus, Result, WorkType, WorkTypeId,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use super::ports::{PayrollRepository, WorkTypeRepository};
use crate::clock::Clock;
use crate::directory::ports::EmployeeRepository;

/// Input for creating a payroll sheet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayrollSheet {
    pub employee_id: EmployeeId,
    pub period: PayPeriod,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Payroll service
pub struct PayrollService {
    sheets: Arc<dyn PayrollRepository>,
    work_types: Arc<dyn WorkTypeRepository>,
    employees: Arc<dyn EmployeeRepository>,
    clock: Arc<dyn Clock>,
}

impl PayrollService {
    pub fn new(
        sheets: Arc<dyn PayrollRepository>,
        work_types: Arc<dyn WorkTypeRepository>,
        employees: Arc<dyn EmployeeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { sheets, work_types, employees, clock }
    }

    /// Sheets ordered by period start (newest first), optionally limited to
    /// one employee.
    pub fn list_sheets(&self, employee: Option<&EmployeeId>) -> Result<Vec<PayrollSheet>> {
        let mut sheets: Vec<_> = self
            .sheets
            .list_sheets()?
            .into_iter()
            .filter(|sheet| employee.map_or(true, |id| sheet.employee_id() == id))
            .collect();
        sheets.sort_by(|a, b| {
            b.period().start().cmp(&a.period().start()).then_with(|| a.id().cmp(b.id()))
        });
        Ok(sheets)
    }

    pub fn get_sheet(&self, id: &PayrollSheetId) -> Result<PayrollSheet> {
        self.sheets.find_sheet(id)?.ok_or_else(|| HelpdeskError::not_found("payroll sheet", id))
    }

    /// Create an empty draft sheet for an existing employee.
    pub fn create_sheet(&self, request: NewPayrollSheet) -> Result<PayrollSheet> {
        if self.employees.find_employee(&request.employee_id)?.is_none() {
            return Err(HelpdeskError::not_found("employee", &request.employee_id));
        }
        let mut sheet = PayrollSheet::new(
            PayrollSheetId::generate(),
            request.employee_id,
            request.period,
            self.clock.now(),
        );
        if let Some(comment) = request.comment.filter(|c| !c.trim().is_empty()) {
            sheet = sheet.with_comment(comment);
        }
        self.sheets.insert_sheet(sheet.clone())?;
        info!(
            sheet_id = %sheet.id(),
            employee_id = %sheet.employee_id(),
            start = %sheet.period().start(),
            end = %sheet.period().end(),
            "payroll_sheet_created"
        );
        Ok(sheet)
    }

    /// Add a line priced at the work type's current unit price.
    pub fn add_item(
        &self,
        sheet_id: &PayrollSheetId,
        work_type_id: &WorkTypeId,
        quantity: Decimal,
    ) -> Result<PayrollSheet> {
        let work_type = self
            .work_types
            .find_work_type(work_type_id)?
            .ok_or_else(|| HelpdeskError::not_found("work type", work_type_id))?;
        let now = self.clock.now();
        let sheet = self.sheets.update_sheet(sheet_id, &mut |sheet| {
            sheet.add_item(&work_type, quantity, now).map(|_| ())
        })?;
        info!(
            sheet_id = %sheet_id,
            work_type_id = %work_type_id,
            %quantity,
            price_per_unit = %work_type.price_per_unit,
            total_amount = %sheet.total_amount(),
            "payroll_item_added"
        );
        Ok(sheet)
    }

    pub fn remove_item(
        &self,
        sheet_id: &PayrollSheetId,
        item_id: &PayrollItemId,
    ) -> Result<PayrollSheet> {
        let now = self.clock.now();
        let sheet = self
            .sheets
            .update_sheet(sheet_id, &mut |sheet| sheet.remove_item(item_id, now).map(|_| ()))?;
        info!(
            sheet_id = %sheet_id,
            item_id = %item_id,
            total_amount = %sheet.total_amount(),
            "payroll_item_removed"
        );
        Ok(sheet)
    }

    /// Advance the sheet's lifecycle status.
    pub fn transition(&self, sheet_id: &PayrollSheetId, target: PayrollStatus) -> Result<PayrollSheet> {
        let now = self.clock.now();
        let mut from = None;
        let result = self.sheets.update_sheet(sheet_id, &mut |sheet| {
            from = Some(sheet.status());
            sheet.transition_status(target, now)
        });
        match result {
            Ok(sheet) => {
                info!(
                    sheet_id = %sheet_id,
                    from = %from.unwrap_or(target),
                    to = %target,
                    "payroll_sheet_transitioned"
                );
                Ok(sheet)
            }
            Err(err) => {
                warn!(sheet_id = %sheet_id, to = %target, error = %err, "payroll_transition_rejected");
                Err(err)
            }
        }
    }

    pub fn work_types(&self) -> Result<Vec<WorkType>> {
        let mut work_types = self.work_types.list_work_types()?;
        work_types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(work_types)
    }

    /// Change a work type's unit price. Lines already on payroll sheets keep
    /// the price they were created with.
    pub fn reprice_work_type(&self, id: &WorkTypeId, price_per_unit: Decimal) -> Result<WorkType> {
        let now = self.clock.now();
        let mut previous = None;
        let work_type = self.work_types.update_work_type(id, &mut |work_type| {
            previous = Some(work_type.price_per_unit);
            work_type.reprice(price_per_unit, now)
        })?;
        info!(
            work_type_id = %id,
            old_price = %previous.unwrap_or(price_per_unit),
            new_price = %price_per_unit,
            "work_type_repriced"
        );
        Ok(work_type)
    }
}
