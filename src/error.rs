//! Error types for the test harness.
//!
//! Validation failures are aggregated: the environment validator and the
//! fixture schema checker both report every failing field in one error, so an
//! operator can fix the whole configuration in a single round trip.

use std::fmt;

/// A single failed field together with the rule it violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Path of the offending field, e.g. `USER_EMAIL` or
    /// `user_credentials[0].password`.
    pub field: String,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn plural(violations: &[FieldViolation]) -> &'static str {
    if violations.len() == 1 { "" } else { "s" }
}

/// Environment validation failure.
///
/// Produced by [`crate::env::EnvConfig`] construction in interactive mode.
/// Carries one violation per failing variable; never a partial subset.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// One or more required environment variables are missing or invalid.
    #[error("environment validation failed ({} violation{})", .violations.len(), plural(.violations))]
    Invalid { violations: Vec<FieldViolation> },
}

impl EnvError {
    /// All recorded violations, one per failing variable.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Invalid { violations } => violations,
        }
    }
}

/// Fixture data failed its structural schema check.
///
/// Enumerates every offending field; checking valid data never constructs
/// this type.
#[derive(Debug, thiserror::Error)]
#[error("fixture schema violation ({} field{})", .violations.len(), plural(.violations))]
pub struct SchemaViolation {
    pub violations: Vec<FieldViolation>,
}

impl SchemaViolation {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// True if the given field path is among the offenders.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// HTTP request failure: transport error or a rejected status code.
///
/// Surfaced to the calling test unchanged; a failed request is terminal for
/// that operation, there is no retry layer.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Network or protocol level failure from the underlying client.
    #[error("request transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response status was rejected by the acceptance predicate.
    #[error("{context}: HTTP {status} - {reason}")]
    UnexpectedStatus {
        status: u16,
        reason: String,
        context: String,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {details}")]
    InvalidBaseUrl { url: String, details: String },
}

/// Failure while seeding the on-disk test state.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to seed storage state at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize storage state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Umbrella error for harness operations.
#[derive(Debug, thiserror::Error)]
pub enum TestkitError {
    #[error("environment error: {0}")]
    Environment(#[from] EnvError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("request error: {0}")]
    Request(#[from] RequestError),

    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Result alias for harness operations.
pub type TestkitResult<T> = Result<T, TestkitError>;
