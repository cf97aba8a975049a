use crate::{
    error::ValidateError,
    obs::{self, ObsEvent},
    report::Report,
    traits::{Path, Validate},
};

///
/// validate
///
/// Evaluate every rule the entity's type declares, collecting issues
/// into one fresh report. No rule's failure short-circuits the rest:
/// the result reports everything wrong at once, not just the first
/// problem, so the caller fixes the entity in one pass.
///

pub fn validate<T: Validate>(entity: &T) -> Result<(), ValidateError> {
    let mut report = Report::new();
    validate_into(entity, &mut report);
    finish::<T>(report)
}

/// Run the full rule pipeline into an existing report.
///
/// Field rules run first (declared order, not contractual), then global
/// rules in declared order, then the custom hook.
pub(crate) fn validate_into<T: Validate>(entity: &T, report: &mut Report) {
    if let Some(rules) = T::rule_set() {
        for rule in rules.field_rules() {
            let value = entity.get_value(rule.field());
            rule.evaluate(value.as_ref(), report);
        }

        for global in rules.global_rules() {
            global.check(entity, report);
        }
    }

    entity.validate_custom(report);
}

pub(crate) fn finish<T: Path>(report: Report) -> Result<(), ValidateError> {
    obs::record(ObsEvent::Validation {
        entity: T::PATH,
        issues: u64::try_from(report.len()).unwrap_or(u64::MAX),
    });

    if report.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::new(report.into_messages()))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{obs::metrics, test_fixtures::User};
    use std::collections::BTreeSet;

    fn valid_user() -> User {
        User {
            username: "ferris_01".to_string(),
            age: 21,
            bio: None,
        }
    }

    #[test]
    fn valid_entity_passes() {
        validate(&valid_user()).expect("valid user");
    }

    #[test]
    fn every_violation_is_reported_at_once() {
        // Three independent violations: short username, underage, and
        // blank bio (global rule). The pattern rule passes on "ab".
        let user = User {
            username: "ab".to_string(),
            age: 17,
            bio: Some(String::new()),
        };

        let err = validate(&user).expect_err("invalid user");
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn repeated_runs_produce_identical_message_sets() {
        let user = User {
            username: "x".to_string(),
            age: 3,
            bio: None,
        };

        let first: BTreeSet<String> = validate(&user)
            .expect_err("invalid")
            .into_messages()
            .into_iter()
            .collect();
        let second: BTreeSet<String> = validate(&user)
            .expect_err("invalid")
            .into_messages()
            .into_iter()
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn satisfied_rules_never_suppress_failing_ones() {
        // Length rules pass; the pattern rule alone fails.
        let user = User {
            username: "has spaces!".to_string(),
            age: 30,
            bio: None,
        };

        let err = validate(&user).expect_err("invalid username");
        assert_eq!(err.len(), 1);
        assert!(err.messages()[0].contains("username"));
        assert!(err.messages()[0].contains("does not match"));
    }

    #[test]
    fn unset_optional_field_is_exempt() {
        let mut user = valid_user();
        user.bio = None;
        validate(&user).expect("absent bio is exempt from length rules");
    }

    #[test]
    fn validation_outcomes_reach_the_counters() {
        metrics::reset();
        validate(&valid_user()).expect("valid");
        let _ = validate(&User {
            username: "x".to_string(),
            age: 17,
            bio: None,
        });

        let state = metrics::snapshot();
        assert_eq!(state.validate_calls, 2);
        assert_eq!(state.validate_failures, 1);
        assert!(state.issues_reported >= 2);
    }
}
