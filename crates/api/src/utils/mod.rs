pub mod command_helpers;
pub mod health;
pub mod logging;

pub use command_helpers::execute_command;
pub use logging::{init_tracing, with_bootstrap_tracing};
