//! # Helpdesk API
//!
//! Application layer - HTTP handlers, router and entry point.
//!
//! This crate contains:
//! - JSON handlers (SPA → backend bridge)
//! - Application context (dependency injection)
//! - Router assembly with the static SPA fallback
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain errors onto HTTP statuses

pub mod commands;
pub mod context;
pub mod router;
pub mod utils;

pub use commands::ApiError;
pub use context::AppContext;
pub use router::build_router;
