pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Args, Command};
pub use commands::{execute, render, Report};
pub use config::{OutputFormat, ZapConfig};
pub use error::{CliError, CliResult};
