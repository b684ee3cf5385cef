//! Error types for the greeter CLI
//!
//! Messages are meant to be read directly by whoever ran the command, so
//! they name the offending value.

use std::io;
use thiserror::Error;

use crate::factorial::FACTORIAL_MAX_INPUT;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the greeter CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Argument Errors ===
    #[error("Invalid argument: factorial is not defined for negative numbers (got {0})")]
    NegativeFactorial(i64),

    #[error("Invalid argument: factorial of {0} does not fit in 128 bits (maximum input is {max})", max = FACTORIAL_MAX_INPUT)]
    FactorialOverflow(i64),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file read error for the given path
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::NegativeFactorial(_) => "NEGATIVE_FACTORIAL",
            Error::FactorialOverflow(_) => "FACTORIAL_OVERFLOW",
            Error::Config(_) | Error::ConfigParse(_) | Error::FileRead { .. } => "CONFIG_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "INTERNAL_ERROR",
        }
    }
}

/// Serializable error for `--json` output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
}

impl From<&Error> for ErrorReport {
    fn from(e: &Error) -> Self {
        Self {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_factorial_message() {
        let msg = Error::NegativeFactorial(-3).to_string();
        assert!(msg.contains("negative"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_overflow_message_names_limit() {
        let msg = Error::FactorialOverflow(40).to_string();
        assert!(msg.contains("40"));
        assert!(msg.contains("34"));
    }

    #[test]
    fn test_report_codes() {
        let report = ErrorReport::from(&Error::NegativeFactorial(-1));
        assert_eq!(report.code, "NEGATIVE_FACTORIAL");

        let report = ErrorReport::from(&Error::ConfigParse("bad".into()));
        assert_eq!(report.code, "CONFIG_ERROR");
        assert_eq!(report.message, "Invalid configuration file: bad");
    }

    #[test]
    fn test_report_serializes_as_object() {
        let report = ErrorReport::from(&Error::FactorialOverflow(99));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "FACTORIAL_OVERFLOW");
        assert!(json["message"].as_str().unwrap().contains("99"));
    }
}
