//! Entity storage
//!
//! Process-local store standing in for a database, plus the demo data set
//! it is filled with at startup.

pub mod memory;
pub mod seed;

pub use memory::{InMemoryStore, StoreStats};
pub use seed::{seed, seeded_store};
