//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use helpdesk_domain::HelpdeskError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub HelpdeskError);

impl From<InfraError> for HelpdeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<HelpdeskError> for InfraError {
    fn from(value: HelpdeskError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoHelpdeskError {
    fn into_helpdesk(self) -> HelpdeskError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → HelpdeskError */
/* -------------------------------------------------------------------------- */

impl IntoHelpdeskError for IoError {
    fn into_helpdesk(self) -> HelpdeskError {
        match self.kind() {
            ErrorKind::NotFound => HelpdeskError::NotFound(self.to_string()),
            ErrorKind::AddrInUse => HelpdeskError::Io(format!("address already in use: {self}")),
            ErrorKind::PermissionDenied => HelpdeskError::Io(format!("permission denied: {self}")),
            _ => HelpdeskError::Io(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_helpdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* Config parse errors → HelpdeskError */
/* -------------------------------------------------------------------------- */

impl IntoHelpdeskError for JsonError {
    fn into_helpdesk(self) -> HelpdeskError {
        HelpdeskError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_helpdesk())
    }
}

impl IntoHelpdeskError for TomlError {
    fn into_helpdesk(self) -> HelpdeskError {
        HelpdeskError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_helpdesk())
    }
}
