pub mod commands;
pub mod logging;
pub mod session;

pub use commands::{Cli, Commands, run};
