//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the helpdesk
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HelpdeskError {
    /// Invalid input to a calculation or command
    #[error("Validation error: {0}")]
    Validation(String),

    /// Illegal lifecycle transition
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HelpdeskError {
    /// Build a `NotFound` error for an entity kind and identifier.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{kind} '{id}'"))
    }

    /// Build an `InvalidTransition` error from any displayable states.
    pub fn invalid_transition(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        Self::InvalidTransition { from: from.to_string(), to: to.to_string() }
    }

    /// Stable label suitable for logging and API payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for helpdesk operations
pub type Result<T> = std::result::Result<T, HelpdeskError>;
