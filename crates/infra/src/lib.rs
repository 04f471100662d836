//! # Helpdesk Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The in-memory entity store and its demo data
//! - The system clock
//! - Configuration loading (files and environment)
//! - Static SPA serving and HTTP hardening
//!
//! ## Architecture
//! - Implements traits defined in `helpdesk-core`
//! - Depends on `helpdesk-domain` and `helpdesk-core`
//! - Contains all "impure" code (I/O, sockets, wall clock)

pub mod clock;
pub mod config;
pub mod errors;
pub mod http;
pub mod store;

// Re-export commonly used items
pub use clock::SystemClock;
pub use errors::InfraError;
pub use store::{InMemoryStore, StoreStats};
