use std::fmt::Display;

///
/// Report
///
/// Mutable collector of validation messages for exactly one `validate`
/// call. Created fresh at the start of the run, consumed at its end;
/// never shared across calls or threads.
///
/// Message order reflects rule-evaluation order. Callers must not depend
/// on it for correctness, only for diagnostics.
///

#[derive(Debug, Default)]
pub struct Report {
    messages: Vec<String>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a whole-entity message.
    pub fn issue(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Append a field-scoped message, rendered as `"{field}: {msg}"`.
    pub fn issue_at(&mut self, field: &str, msg: impl Display) {
        self.messages.push(format!("{field}: {msg}"));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn preserves_append_order() {
        let mut report = Report::new();
        report.issue_at("username", "too short");
        report.issue("password and confirmation differ");

        assert_eq!(
            report.into_messages(),
            vec![
                "username: too short".to_string(),
                "password and confirmation differ".to_string(),
            ]
        );
    }
}
