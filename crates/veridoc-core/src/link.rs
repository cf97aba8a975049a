use crate::{
    error::ValidateError,
    obs::{self, ObsEvent},
    reference::Reference,
    report::Report,
    rule::RuleKind,
    store::{EntityStore, SaveError},
    traits::Validate,
    validate,
};

///
/// EdgeValue
///
/// An entity holding two mandatory reference fields, representing a
/// directed relationship between two other entities. The endpoint
/// accessors expose the raw stored strings so validation can catch a
/// constructor that produced a malformed endpoint.
///

pub trait EdgeValue: Validate {
    const FROM_FIELD: &'static str = "_from";
    const TO_FIELD: &'static str = "_to";

    fn source(&self) -> &str;
    fn target(&self) -> &str;
}

fn check_endpoint(field: &'static str, raw: &str, report: &mut Report) {
    if let Err(err) = raw.parse::<Reference>() {
        report.issue_at(field, err);
    }
}

/// True when the type's own rule set already carries the grammar check
/// for this endpoint (the usual case, via `reference_field`).
fn declares_reference_rule<E: EdgeValue>(field: &str) -> bool {
    E::rule_set().is_some_and(|rules| {
        rules
            .field_rules()
            .iter()
            .any(|rule| rule.field() == field && matches!(rule.kind(), RuleKind::Reference(_)))
    })
}

///
/// validate_edge
///
/// The engine pipeline plus a backstop for the endpoint invariant: both
/// endpoints must be well-formed per the reference grammar whenever an
/// edge is validated. Edge types declare their endpoints with
/// `reference_field`, which puts the grammar check in the ordinary rule
/// set (so plain `validate`/`save` enforce it too); an edge type that
/// omits the declaration still gets checked here. Endpoint issues and
/// rule issues share one report.
///

pub fn validate_edge<E: EdgeValue>(edge: &E) -> Result<(), ValidateError> {
    let mut report = Report::new();

    if !declares_reference_rule::<E>(E::FROM_FIELD) {
        check_endpoint(E::FROM_FIELD, edge.source(), &mut report);
    }
    if !declares_reference_rule::<E>(E::TO_FIELD) {
        check_endpoint(E::TO_FIELD, edge.target(), &mut report);
    }
    validate::validate_into(edge, &mut report);

    validate::finish::<E>(report)
}

///
/// link
///
/// Construct and persist one relationship record between two existing
/// entities. The endpoints are known-valid `Reference` values from
/// prior creations, never caller-supplied raw strings; the candidate
/// the constructor returns is validated before any write, and a
/// candidate that fails validation is discarded, never persisted.
///

pub fn link<E, S, F>(
    from: &Reference,
    to: &Reference,
    store: &S,
    build: F,
) -> Result<E, SaveError<S::Error>>
where
    E: EdgeValue,
    S: EntityStore<E>,
    F: FnOnce(&Reference, &Reference) -> E,
{
    let candidate = build(from, to);

    if let Err(err) = validate_edge(&candidate) {
        obs::record(ObsEvent::LinkBlocked {
            edge: E::PATH,
            issues: u64::try_from(err.len()).unwrap_or(u64::MAX),
        });
        return Err(SaveError::Validate(err));
    }

    let edge = store.insert(candidate).map_err(SaveError::Store)?;
    obs::record(ObsEvent::LinkPersisted { edge: E::PATH });

    Ok(edge)
}

///
/// TESTS
///
