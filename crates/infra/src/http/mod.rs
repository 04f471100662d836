//! HTTP building blocks: static SPA serving, response hardening and the
//! listener lifecycle

pub mod headers;
pub mod server;
pub mod spa;

pub use headers::security_headers;
pub use server::{bind, serve, shutdown_signal};
pub use spa::{asset_cache_control, entry_document_exists, spa_router};
