//! Clients, employees and departments

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::DirectoryService;
