mod commands;

pub use commands::{Cli, Commands, execute, run};
