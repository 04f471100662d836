//! Payroll sheets and work types
//!
//! A payroll sheet is a per-employee, per-period statement of billable work.
//! Each line pins a copy of the work type's unit price at the moment it was
//! added, so later repricing never rewrites history.
//!
//! Invariants enforced by this module:
//! - `item.total() == item.quantity() * item.price_per_unit()` at every read
//! - `sheet.total_amount() == Σ item.total()` (zero for an empty sheet)
//! - status only moves `draft → approved → paid`
//! - the period satisfies `start <= end`
//!
//! Sheet and item fields are private so these invariants cannot be bypassed;
//! the serialized form is produced through record types that carry the
//! derived totals.

use std::convert::TryFrom;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::{HelpdeskError, Result};
use crate::types::{EmployeeId, PayrollItemId, PayrollSheetId, WorkTypeId};

/* -------------------------------------------------------------------------- */
/* Work types */
/* -------------------------------------------------------------------------- */

/// Billable unit of labour with a unit price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct WorkType {
    pub id: WorkTypeId,
    pub name: String,
    /// Unit of measure, e.g. "ticket" or "hour"
    pub unit: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub price_per_unit: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl WorkType {
    /// Change the unit price. Existing payroll items keep their own copy.
    ///
    /// # Errors
    /// Returns `HelpdeskError::Validation` for a negative price.
    pub fn reprice(&mut self, price_per_unit: Decimal, now: DateTime<Utc>) -> Result<()> {
        if price_per_unit < Decimal::ZERO {
            return Err(HelpdeskError::Validation(format!(
                "price per unit must not be negative (got {price_per_unit})"
            )));
        }
        self.price_per_unit = price_per_unit;
        self.updated_at = now;
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */
/* Status */
/* -------------------------------------------------------------------------- */

/// Payroll sheet lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    Draft,
    Approved,
    Paid,
}

impl PayrollStatus {
    /// The only status reachable from this one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Draft => Some(Self::Approved),
            Self::Approved => Some(Self::Paid),
            Self::Paid => None,
        }
    }

    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl_domain_status_conversions!(PayrollStatus {
    Draft => "draft",
    Approved => "approved",
    Paid => "paid",
});

/* -------------------------------------------------------------------------- */
/* Period */
/* -------------------------------------------------------------------------- */

/// Half-open date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(try_from = "RawPeriod")]
pub struct PayPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawPeriod> for PayPeriod {
    type Error = HelpdeskError;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl PayPeriod {
    /// # Errors
    /// Returns `HelpdeskError::Validation` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(HelpdeskError::Validation(format!(
                "pay period start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/* -------------------------------------------------------------------------- */
/* Items */
/* -------------------------------------------------------------------------- */

/// One line of a payroll sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PayrollItemRecord", try_from = "PayrollItemRecord")]
pub struct PayrollSheetItem {
    id: PayrollItemId,
    work_type_id: WorkTypeId,
    work_type_name: String,
    unit: String,
    price_per_unit: Decimal,
    quantity: Decimal,
}

/// Serialized form of a payroll line, with its derived total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename = "PayrollSheetItem"))]
#[serde(rename_all = "camelCase")]
pub struct PayrollItemRecord {
    pub id: PayrollItemId,
    pub work_type_id: WorkTypeId,
    pub work_type_name: String,
    pub unit: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub price_per_unit: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub quantity: Decimal,
    /// Ignored on input; always recomputed
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total: Decimal,
}

impl PayrollSheetItem {
    fn snapshot(work_type: &WorkType, quantity: Decimal) -> Result<Self> {
        Self::validated(
            PayrollItemId::generate(),
            work_type.id.clone(),
            work_type.name.clone(),
            work_type.unit.clone(),
            work_type.price_per_unit,
            quantity,
        )
    }

    fn validated(
        id: PayrollItemId,
        work_type_id: WorkTypeId,
        work_type_name: String,
        unit: String,
        price_per_unit: Decimal,
        quantity: Decimal,
    ) -> Result<Self> {
        if quantity <= Decimal::ZERO {
            return Err(HelpdeskError::Validation(format!(
                "quantity must be positive (got {quantity})"
            )));
        }
        if price_per_unit < Decimal::ZERO {
            return Err(HelpdeskError::Validation(format!(
                "price per unit must not be negative (got {price_per_unit})"
            )));
        }
        if quantity.checked_mul(price_per_unit).is_none() {
            return Err(HelpdeskError::Validation(format!(
                "line total overflows for {quantity} x {price_per_unit}"
            )));
        }
        Ok(Self { id, work_type_id, work_type_name, unit, price_per_unit, quantity })
    }

    pub fn id(&self) -> &PayrollItemId {
        &self.id
    }

    pub fn work_type_id(&self) -> &WorkTypeId {
        &self.work_type_id
    }

    /// Work type name as it was when the line was added.
    pub fn work_type_name(&self) -> &str {
        &self.work_type_name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Unit price captured when the line was added.
    pub fn price_per_unit(&self) -> Decimal {
        self.price_per_unit
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// `quantity × price_per_unit`. Construction rejects overflowing pairs.
    pub fn total(&self) -> Decimal {
        self.quantity * self.price_per_unit
    }
}

impl From<PayrollSheetItem> for PayrollItemRecord {
    fn from(item: PayrollSheetItem) -> Self {
        let total = item.total();
        Self {
            id: item.id,
            work_type_id: item.work_type_id,
            work_type_name: item.work_type_name,
            unit: item.unit,
            price_per_unit: item.price_per_unit,
            quantity: item.quantity,
            total,
        }
    }
}

impl TryFrom<PayrollItemRecord> for PayrollSheetItem {
    type Error = HelpdeskError;

    fn try_from(record: PayrollItemRecord) -> Result<Self> {
        Self::validated(
            record.id,
            record.work_type_id,
            record.work_type_name,
            record.unit,
            record.price_per_unit,
            record.quantity,
        )
    }
}

/* -------------------------------------------------------------------------- */
/* Sheets */
/* -------------------------------------------------------------------------- */

/// Per-employee, per-period payroll statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PayrollSheetRecord", try_from = "PayrollSheetRecord")]
pub struct PayrollSheet {
    id: PayrollSheetId,
    employee_id: EmployeeId,
    period: PayPeriod,
    items: Vec<PayrollSheetItem>,
    status: PayrollStatus,
    total_amount: Decimal,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Serialized form of a payroll sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename = "PayrollSheet"))]
#[serde(rename_all = "camelCase")]
pub struct PayrollSheetRecord {
    pub id: PayrollSheetId,
    pub employee_id: EmployeeId,
    pub period: PayPeriod,
    #[serde(default)]
    pub items: Vec<PayrollItemRecord>,
    pub status: PayrollStatus,
    /// Ignored on input; always recomputed
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_amount: Decimal,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PayrollSheet {
    /// Create an empty draft sheet.
    pub fn new(
        id: PayrollSheetId,
        employee_id: EmployeeId,
        period: PayPeriod,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id,
            period,
            items: Vec::new(),
            status: PayrollStatus::Draft,
            total_amount: Decimal::ZERO,
            comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn id(&self) -> &PayrollSheetId {
        &self.id
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn period(&self) -> &PayPeriod {
        &self.period
    }

    pub fn items(&self) -> &[PayrollSheetItem] {
        &self.items
    }

    pub fn item(&self, id: &PayrollItemId) -> Option<&PayrollSheetItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn status(&self) -> PayrollStatus {
        self.status
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Append a line priced at the work type's current unit price.
    ///
    /// # Errors
    /// - `Validation` if `quantity <= 0`, the sheet is no longer a draft, or
    ///   the resulting total would overflow.
    pub fn add_item(
        &mut self,
        work_type: &WorkType,
        quantity: Decimal,
        now: DateTime<Utc>,
    ) -> Result<&PayrollSheetItem> {
        self.ensure_draft()?;
        let item = PayrollSheetItem::snapshot(work_type, quantity)?;
        if self.total_amount.checked_add(item.total()).is_none() {
            return Err(HelpdeskError::Validation("sheet total overflows".into()));
        }
        self.items.push(item);
        self.recompute_total();
        self.updated_at = now;
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Remove a line from a draft sheet.
    ///
    /// # Errors
    /// - `Validation` if the sheet is no longer a draft
    /// - `NotFound` if no line has this id
    pub fn remove_item(
        &mut self,
        item_id: &PayrollItemId,
        now: DateTime<Utc>,
    ) -> Result<PayrollSheetItem> {
        self.ensure_draft()?;
        let index = self
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or_else(|| HelpdeskError::not_found("payroll item", item_id))?;
        let removed = self.items.remove(index);
        self.recompute_total();
        self.updated_at = now;
        Ok(removed)
    }

    /// Recompute `total_amount` from the lines. Idempotent.
    pub fn recompute_total(&mut self) -> Decimal {
        self.total_amount = sum_totals(&self.items);
        self.total_amount
    }

    /// Move to the next lifecycle status.
    ///
    /// # Errors
    /// Returns `InvalidTransition` for anything but `draft → approved` or
    /// `approved → paid`.
    pub fn transition_status(&mut self, target: PayrollStatus, now: DateTime<Utc>) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(HelpdeskError::invalid_transition(self.status, target));
        }
        self.status = target;
        self.updated_at = now;
        Ok(())
    }

    fn ensure_draft(&self) -> Result<()> {
        if self.status == PayrollStatus::Draft {
            Ok(())
        } else {
            Err(HelpdeskError::Validation(format!(
                "payroll sheet {} is {}; only drafts can be edited",
                self.id, self.status
            )))
        }
    }
}

fn sum_totals(items: &[PayrollSheetItem]) -> Decimal {
    items.iter().map(PayrollSheetItem::total).sum()
}

impl From<PayrollSheet> for PayrollSheetRecord {
    fn from(sheet: PayrollSheet) -> Self {
        Self {
            id: sheet.id,
            employee_id: sheet.employee_id,
            period: sheet.period,
            items: sheet.items.into_iter().map(PayrollItemRecord::from).collect(),
            status: sheet.status,
            total_amount: sheet.total_amount,
            comment: sheet.comment,
            created_at: sheet.created_at,
            updated_at: sheet.updated_at,
        }
    }
}

impl TryFrom<PayrollSheetRecord> for PayrollSheet {
    type Error = HelpdeskError;

    fn try_from(record: PayrollSheetRecord) -> Result<Self> {
        let items = record
            .items
            .into_iter()
            .map(PayrollSheetItem::try_from)
            .collect::<Result<Vec<_>>>()?;
        let total = items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.total()))
            .ok_or_else(|| HelpdeskError::Validation("sheet total overflows".into()))?;
        Ok(Self {
            id: record.id,
            employee_id: record.employee_id,
            period: record.period,
            items,
            status: record.status,
            total_amount: total,
            comment: record.comment,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
