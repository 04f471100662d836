//! Domain types and models
//!
//! Entities reference each other by typed identifier only; lookups go
//! through the store, never through embedded copies.

pub mod directory;
pub mod ticket;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

pub use directory::{Client, CustomFieldValue, Department, Employee, IntegrationDescriptor};
pub use ticket::{
    Attachment, InternalNote, MessageAuthor, NoteBody, ReplyAuthor, Ticket, TicketDetails,
    TicketMessage, TicketPriority, TicketStatus, TicketSummary,
};

// ============================================================================
// Identifiers
// ============================================================================

define_entity_id!(
    /// Ticket identifier
    TicketId
);
define_entity_id!(
    /// Client identifier
    ClientId
);
define_entity_id!(
    /// Employee identifier
    EmployeeId
);
define_entity_id!(
    /// Department identifier
    DepartmentId
);
define_entity_id!(
    /// Work type identifier
    WorkTypeId
);
define_entity_id!(
    /// Payroll sheet identifier
    PayrollSheetId
);
define_entity_id!(
    /// Payroll sheet line identifier
    PayrollItemId
);

// ============================================================================
// Channels
// ============================================================================

/// Source channel a ticket or message arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Phone,
    Web,
    Chat,
    Telegram,
    WhatsApp,
    Viber,
}

impl Channel {
    /// All channel kinds, in display order.
    pub const ALL: [Self; 7] = [
        Self::Email,
        Self::Phone,
        Self::Web,
        Self::Chat,
        Self::Telegram,
        Self::WhatsApp,
        Self::Viber,
    ];

    /// Messenger channels are integration descriptors only; no transport
    /// exists for them.
    pub fn is_messenger(self) -> bool {
        matches!(self, Self::Telegram | Self::WhatsApp | Self::Viber)
    }
}

impl_domain_status_conversions!(Channel {
    Email => "email",
    Phone => "phone",
    Web => "web",
    Chat => "chat",
    Telegram => "telegram",
    WhatsApp => "whatsapp",
    Viber => "viber",
});
