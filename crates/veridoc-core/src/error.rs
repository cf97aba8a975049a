use crate::rule::FieldType;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for callers that want a single type. The two classes
/// stay disjoint: configuration errors are fatal and construction-time,
/// validation failures are recoverable and evaluation-time.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

///
/// ConfigError
///
/// A rule set that cannot be constructed. Detected when the builder
/// runs, before the owning type can ever reach `validate`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("duplicate field declaration: {field}")]
    DuplicateField { field: &'static str },

    #[error("{rule} rule is incompatible with {field} (declared {declared:?})")]
    IncompatibleRule {
        field: &'static str,
        rule: &'static str,
        declared: FieldType,
    },

    #[error("invalid parameters for {rule} rule on {field}: {message}")]
    InvalidParams {
        field: &'static str,
        rule: &'static str,
        message: String,
    },

    #[error("rule references undeclared field: {field}")]
    UnknownField { field: &'static str },
}

///
/// ValidateError
///
/// The single aggregated failure for one validation run. Carries every
/// message the run produced; never surfaced as multiple errors and never
/// as a bare boolean.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidateError {
    messages: Vec<String>,
}

impl ValidateError {
    #[must_use]
    pub const fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: {}", self.messages.join("; "))
    }
}

impl std::error::Error for ValidateError {}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_error_display_carries_every_message() {
        let err = ValidateError::new(vec![
            "username: too short".to_string(),
            "age: 17 must be >= 18".to_string(),
        ]);

        let rendered = err.to_string();
        assert!(rendered.contains("username: too short"));
        assert!(rendered.contains("age: 17 must be >= 18"));
    }

    #[test]
    fn config_error_names_the_offending_field() {
        let err = ConfigError::UnknownField { field: "missing" };
        assert!(err.to_string().contains("missing"));
    }
}
