use crate::traits::Validator;
use regex::Regex;

///
/// Pattern
///
/// Full-value regular-expression match. The source expression is
/// anchored at compile time so a partial match never passes.
///

#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
    error: Option<String>,
}

impl Pattern {
    #[must_use]
    pub fn new(source: &str) -> Self {
        match Regex::new(&format!("^(?:{source})$")) {
            Ok(regex) => Self {
                source: source.to_string(),
                regex: Some(regex),
                error: None,
            },
            Err(e) => Self {
                source: source.to_string(),
                regex: None,
                error: Some(e.to_string()),
            },
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn config_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Validator<str> for Pattern {
    fn validate(&self, value: &str) -> Result<(), String> {
        // A pattern with a config error never reaches evaluation; the
        // builder rejects the rule set first.
        let Some(regex) = &self.regex else {
            return Err(format!("pattern '{}' failed to compile", self.source));
        };

        if regex.is_match(value) {
            Ok(())
        } else {
            Err(format!("'{value}' does not match pattern '{}'", self.source))
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_full_value_only() {
        let p = Pattern::new(r"[a-z]+");
        assert!(p.validate("hello").is_ok());
        assert!(p.validate("hello1").is_err());
        assert!(p.validate("1hello").is_err());
    }

    #[test]
    fn empty_value_needs_an_explicitly_empty_pattern() {
        let p = Pattern::new(r"[a-z]*");
        assert!(p.validate("").is_ok());

        let q = Pattern::new(r"[a-z]+");
        assert!(q.validate("").is_err());
    }

    #[test]
    fn malformed_pattern_is_a_config_error() {
        let p = Pattern::new(r"[unclosed");
        assert!(p.config_error().is_some());
    }
}
