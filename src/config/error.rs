//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Configuration declares no states")]
    NoStates,

    #[error("Initial state '{state}' is not declared")]
    UndeclaredInitial { state: String },

    #[error("Baseline state '{state}' is not declared")]
    UndeclaredBaseline { state: String },

    #[error("Transition '{from}' --{event}--> '{to}' targets an undeclared state")]
    UndeclaredTarget {
        from: String,
        event: String,
        to: String,
    },
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violation found, not just the first
    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    /// JSON input could not be parsed into a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration could not be written out as JSON
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

impl ConfigError {
    /// Violations carried by an `Invalid` error; empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
