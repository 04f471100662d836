//! # Helpdesk Domain
//!
//! Business domain types and derived-state rules for the helpdesk.
//!
//! This crate contains:
//! - Entity types (Ticket, Client, Employee, Department, WorkType, payroll)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - SLA derivation, payroll calculation and column configuration rules
//!
//! ## Architecture
//! - No dependencies on other helpdesk crates
//! - Only external dependencies allowed
//! - Pure domain models, no I/O

#[macro_use]
pub mod macros;

pub mod columns;
pub mod config;
pub mod constants;
pub mod errors;
pub mod payroll;
pub mod sla;
pub mod types;

// Re-export commonly used items
pub use columns::{ColumnCommand, ColumnDescriptor};
pub use config::*;
pub use errors::*;
pub use payroll::{PayPeriod, PayrollSheet, PayrollSheetItem, PayrollStatus, WorkType};
pub use sla::{SlaOverview, SlaPolicy, SlaStatus};
pub use types::*;
