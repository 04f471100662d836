//! Port interfaces for payroll
//!
//! Mutations go through `update_*` so the store can apply them atomically:
//! the closure runs against a working copy which is committed only when it
//! returns `Ok`.

use helpdesk_domain::{PayrollSheet, PayrollSheetId, Result, WorkType, WorkTypeId};

/// Callback mutating a stored record in place
pub type Mutation<'a, T> = &'a mut dyn FnMut(&mut T) -> Result<()>;

/// Storage for work types
pub trait WorkTypeRepository: Send + Sync {
    fn list_work_types(&self) -> Result<Vec<WorkType>>;

    fn find_work_type(&self, id: &WorkTypeId) -> Result<Option<WorkType>>;

    /// Apply `mutation` to the stored work type and return the committed value.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, or whatever `mutation` returns.
    fn update_work_type(&self, id: &WorkTypeId, mutation: Mutation<'_, WorkType>)
        -> Result<WorkType>;
}

/// Storage for payroll sheets
pub trait PayrollRepository: Send + Sync {
    fn list_sheets(&self) -> Result<Vec<PayrollSheet>>;

    fn find_sheet(&self, id: &PayrollSheetId) -> Result<Option<PayrollSheet>>;

    /// Store a new sheet.
    ///
    /// # Errors
    /// `Validation` if a sheet with the same id already exists.
    fn insert_sheet(&self, sheet: PayrollSheet) -> Result<()>;

    /// Apply `mutation` to the stored sheet and return the committed value.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, or whatever `mutation` returns.
    fn update_sheet(
        &self,
        id: &PayrollSheetId,
        mutation: Mutation<'_, PayrollSheet>,
    ) -> Result<PayrollSheet>;
}
