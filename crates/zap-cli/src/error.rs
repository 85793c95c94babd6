//! Error types for the command-line front end

use thiserror::Error;
use zap_core::ZapCoreError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Math error: {0}")]
    Math(#[from] ZapCoreError),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Config field outside its accepted range
    pub fn invalid_parameter(field: &str, value: &str, expected: &str) -> Self {
        CliError::InvalidConfig(format!("{} = {} (expected {})", field, value, expected))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::invalid_parameter("axis.tick_count", "0", "between 1 and 50");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: axis.tick_count = 0 (expected between 1 and 50)"
        );

        let err: CliError = ZapCoreError::TickOutOfRange(900_000).into();
        assert_eq!(err.to_string(), "Math error: Tick 900000 out of range");
    }
}
