//! Macros for domain enums and identifiers
//!
//! `impl_domain_status_conversions!` implements Display and FromStr for
//! status-like enums with a single variant-to-string table, handling
//! case-insensitive parsing and consistent string representation.
//!
//! # Example
//!
//! ```rust
//! use helpdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum SheetStage {
//!     Draft,
//!     Approved,
//!     Paid,
//! }
//!
//! impl_domain_status_conversions!(SheetStage {
//!     Draft => "draft",
//!     Approved => "approved",
//!     Paid => "paid",
//! });
//!
//! assert_eq!(SheetStage::Approved.to_string(), "approved");
//! assert_eq!("PAID".parse::<SheetStage>(), Ok(SheetStage::Paid));
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their wire strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations (must be lowercase)
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

/// Declares a string-backed identifier newtype.
///
/// Identifiers serialize as plain strings and are only ever compared or
/// looked up, never parsed, so any non-empty string is accepted.
macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[cfg_attr(feature = "ts-gen", derive(ts_rs::TS))]
        #[cfg_attr(feature = "ts-gen", ts(export))]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh time-ordered identifier (UUIDv7).
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7().to_string())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    // Test enum for macro validation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Open,
        InProgress,
        Done,
    }

    impl_domain_status_conversions!(TestStatus {
        Open => "open",
        InProgress => "in-progress",
        Done => "done",
    });

    define_entity_id!(TestId);

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStatus::Open.to_string(), "open");
        assert_eq!(TestStatus::InProgress.to_string(), "in-progress");
        assert_eq!(TestStatus::Done.to_string(), "done");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestStatus::from_str("OPEN").unwrap(), TestStatus::Open);
        assert_eq!(TestStatus::from_str("In-Progress").unwrap(), TestStatus::InProgress);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("archived");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestStatus: archived"));
    }

    mod with_result_alias {
        // A one-parameter `Result` alias in scope must not leak into the expansion
        #[allow(unused_imports)]
        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Stage {
            Draft,
            Paid,
        }

        impl_domain_status_conversions!(Stage {
            Draft => "draft",
            Paid => "paid",
        });
    }

    #[test]
    fn test_conversions_expand_beside_result_alias() {
        use with_result_alias::Stage;
        assert_eq!("PAID".parse::<Stage>(), Ok(Stage::Paid));
        assert_eq!(Stage::Draft.to_string(), "draft");
        assert!("void".parse::<Stage>().is_err());
    }

    #[test]
    fn test_entity_id_is_transparent() {
        let id = TestId::new("t-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t-1\"");
        assert_eq!(id.to_string(), "t-1");
        assert_ne!(TestId::generate(), TestId::generate());
    }
}
