//! Ticket domain

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::*;
