//! # Helpdesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the entity store and the clock
//! - Ticket queries with derived SLA status
//! - Payroll use-cases resolving references through the store
//! - Per-session column layouts
//!
//! ## Architecture Principles
//! - Only depends on `helpdesk-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod clock;
pub mod columns;
pub mod directory;
pub mod payroll;
pub mod tickets;

// Re-export specific items to avoid ambiguity
pub use clock::{Clock, MockClock};
pub use columns::ColumnLayout;
pub use directory::ports::{ClientRepository, DepartmentRepository, EmployeeRepository};
pub use directory::DirectoryService;
pub use payroll::ports::{PayrollRepository, WorkTypeRepository};
pub use payroll::{NewPayrollSheet, PayrollService};
pub use tickets::ports::TicketRepository;
pub use tickets::{TicketFilter, TicketService};
