use crate::{
    error::ConfigError,
    report::Report,
    traits::Validator,
    validator::{len, num, reference, text},
    value::Value,
};
use num_traits::ToPrimitive;
use std::fmt;

///
/// FieldType
///
/// The declared type of a field at rule-registration time. Used only
/// for construction-time compatibility checking; evaluation works on
/// `Value` directly.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    Bool,
    List,
    Numeric,
    Text,
}

///
/// CustomCheck
///
/// Caller-supplied single-field check. Trusted to append its own
/// messages and to not panic; a check that raises is a contract
/// violation of the host model, not of the engine.
///

pub struct CustomCheck {
    check: Box<dyn Fn(&'static str, &Value, &mut Report) + Send + Sync>,
}

impl CustomCheck {
    fn new<F>(check: F) -> Self
    where
        F: Fn(&'static str, &Value, &mut Report) + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }

    pub(crate) fn run(&self, field: &'static str, value: &Value, report: &mut Report) {
        (self.check)(field, value, report);
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCheck(..)")
    }
}

///
/// RuleKind
///
/// One atomic check against one field's value. Builtin kinds wrap the
/// validator primitives; `CustomField` defers to a caller-supplied
/// check function.
///

#[derive(Debug)]
pub enum RuleKind {
    CustomField(CustomCheck),
    ExactLength(len::Equal),
    GreaterOrEqual(num::Gte),
    GreaterThan(num::Gt),
    LessOrEqual(num::Lte),
    LessThan(num::Lt),
    MaxLength(len::Max),
    MinLength(len::Min),
    Pattern(text::Pattern),
    Reference(reference::WellFormed),
}

impl RuleKind {
    #[must_use]
    pub const fn exact_length(target: usize) -> Self {
        Self::ExactLength(len::Equal::new(target))
    }

    #[must_use]
    pub const fn min_length(target: usize) -> Self {
        Self::MinLength(len::Min::new(target))
    }

    #[must_use]
    pub const fn max_length(target: usize) -> Self {
        Self::MaxLength(len::Max::new(target))
    }

    #[must_use]
    pub fn pattern(source: &str) -> Self {
        Self::Pattern(text::Pattern::new(source))
    }

    #[must_use]
    pub const fn reference() -> Self {
        Self::Reference(reference::WellFormed)
    }

    #[must_use]
    pub fn greater_than<N: ToPrimitive>(target: N) -> Self {
        Self::GreaterThan(num::Gt::new(target))
    }

    #[must_use]
    pub fn greater_or_equal<N: ToPrimitive>(target: N) -> Self {
        Self::GreaterOrEqual(num::Gte::new(target))
    }

    #[must_use]
    pub fn less_than<N: ToPrimitive>(target: N) -> Self {
        Self::LessThan(num::Lt::new(target))
    }

    #[must_use]
    pub fn less_or_equal<N: ToPrimitive>(target: N) -> Self {
        Self::LessOrEqual(num::Lte::new(target))
    }

    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&'static str, &Value, &mut Report) + Send + Sync + 'static,
    {
        Self::CustomField(CustomCheck::new(check))
    }

    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::CustomField(_) => "custom",
            Self::ExactLength(_) => "exact_length",
            Self::GreaterOrEqual(_) => "greater_or_equal",
            Self::GreaterThan(_) => "greater_than",
            Self::LessOrEqual(_) => "less_or_equal",
            Self::LessThan(_) => "less_than",
            Self::MaxLength(_) => "max_length",
            Self::MinLength(_) => "min_length",
            Self::Pattern(_) => "pattern",
            Self::Reference(_) => "reference",
        }
    }

    pub(crate) fn compatible_with(&self, declared: FieldType) -> bool {
        match self {
            Self::CustomField(_) => true,
            Self::ExactLength(_) | Self::MaxLength(_) | Self::MinLength(_) => {
                matches!(declared, FieldType::List | FieldType::Text)
            }
            Self::Pattern(_) | Self::Reference(_) => declared == FieldType::Text,
            Self::GreaterOrEqual(_)
            | Self::GreaterThan(_)
            | Self::LessOrEqual(_)
            | Self::LessThan(_) => declared == FieldType::Numeric,
        }
    }

    pub(crate) fn config_error(&self) -> Option<String> {
        match self {
            Self::GreaterOrEqual(v) => v.config_error().map(str::to_string),
            Self::GreaterThan(v) => v.config_error().map(str::to_string),
            Self::LessOrEqual(v) => v.config_error().map(str::to_string),
            Self::LessThan(v) => v.config_error().map(str::to_string),
            Self::Pattern(v) => v.config_error().map(str::to_string),
            _ => None,
        }
    }

    fn check(&self, field: &'static str, value: &Value, report: &mut Report) {
        match self {
            Self::CustomField(custom) => custom.run(field, value, report),
            Self::ExactLength(v) => check_len(field, value, v, report),
            Self::MinLength(v) => check_len(field, value, v, report),
            Self::MaxLength(v) => check_len(field, value, v, report),
            Self::Pattern(v) => check_text(field, value, v, report),
            Self::Reference(v) => check_text(field, value, v, report),
            Self::GreaterThan(v) => check_num(field, value, v, report),
            Self::GreaterOrEqual(v) => check_num(field, value, v, report),
            Self::LessThan(v) => check_num(field, value, v, report),
            Self::LessOrEqual(v) => check_num(field, value, v, report),
        }
    }
}

fn apply(result: Result<(), String>, field: &str, report: &mut Report) {
    if let Err(msg) = result {
        report.issue_at(field, msg);
    }
}

fn check_len<V>(field: &'static str, value: &Value, validator: &V, report: &mut Report)
where
    V: Validator<str> + Validator<[Value]>,
{
    match value {
        Value::Text(s) => apply(Validator::<str>::validate(validator, s), field, report),
        Value::List(items) => apply(
            Validator::<[Value]>::validate(validator, items),
            field,
            report,
        ),
        other => report.issue_at(
            field,
            format!("expected a text or list value, got {}", other.type_name()),
        ),
    }
}

fn check_text<V: Validator<str>>(
    field: &'static str,
    value: &Value,
    validator: &V,
    report: &mut Report,
) {
    match value {
        Value::Text(s) => apply(validator.validate(s), field, report),
        other => report.issue_at(
            field,
            format!("expected a text value, got {}", other.type_name()),
        ),
    }
}

fn check_num<V: Validator<f64>>(
    field: &'static str,
    value: &Value,
    validator: &V,
    report: &mut Report,
) {
    match value.as_f64() {
        Some(n) => apply(validator.validate(&n), field, report),
        None => report.issue_at(
            field,
            format!("expected a numeric value, got {}", value.type_name()),
        ),
    }
}

///
/// FieldRule
///
/// One named field paired with one check. Evaluation appends zero or
/// more messages to the report and never fails; multiple rules on the
/// same field evaluate independently, with no short-circuit.
///

#[derive(Debug)]
pub struct FieldRule {
    field: &'static str,
    kind: RuleKind,
}

impl FieldRule {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub const fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn evaluate(&self, value: Option<&Value>, report: &mut Report) {
        match value {
            Some(value) if !value.is_null() => self.kind.check(self.field, value, report),

            // Absent fields are exempt from builtin kinds; only a custom
            // check observes absence, and it sees Null.
            _ => {
                if let RuleKind::CustomField(custom) = &self.kind {
                    custom.run(self.field, &Value::Null, report);
                }
            }
        }
    }
}

///
/// GlobalRule
///
/// A whole-entity check, for constraints spanning more than one field
/// (e.g. "if A is set, B must be set"). Evaluated in declared order.
///

pub struct GlobalRule<T: ?Sized> {
    check: Box<dyn Fn(&T, &mut Report) + Send + Sync>,
}

impl<T: ?Sized> GlobalRule<T> {
    fn new<F>(check: F) -> Self
    where
        F: Fn(&T, &mut Report) + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }

    pub fn check(&self, entity: &T, report: &mut Report) {
        (self.check)(entity, report);
    }
}

impl<T: ?Sized> fmt::Debug for GlobalRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GlobalRule(..)")
    }
}

///
/// RuleSet
///
/// The immutable, type-scoped rule collection for one entity type.
/// Built once per type at registration time, then shared read-only by
/// every instance for the life of the process.
///

pub struct RuleSet<T: ?Sized> {
    field_rules: Vec<FieldRule>,
    global_rules: Vec<GlobalRule<T>>,
}

impl<T> RuleSet<T> {
    #[must_use]
    pub fn builder() -> RuleSetBuilder<T> {
        RuleSetBuilder::new()
    }

    #[must_use]
    pub fn field_rules(&self) -> &[FieldRule] {
        &self.field_rules
    }

    #[must_use]
    pub fn global_rules(&self) -> &[GlobalRule<T>] {
        &self.global_rules
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("field_rules", &self.field_rules)
            .field("global_rules", &self.global_rules.len())
            .finish()
    }
}

///
/// RuleSetBuilder
///
/// Explicit registration step: declare the fields with their types,
/// attach rules, then `build`. Incompatible kind/type pairings, rules
/// on undeclared fields, and malformed parameters are rejected here,
/// before the owning type can ever reach `validate`.
///

pub struct RuleSetBuilder<T: ?Sized> {
    fields: Vec<(&'static str, FieldType)>,
    rules: Vec<FieldRule>,
    globals: Vec<GlobalRule<T>>,
}

impl<T> RuleSetBuilder<T> {
    fn new() -> Self {
        Self {
            fields: Vec::new(),
            rules: Vec::new(),
            globals: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push((name, ty));
        self
    }

    #[must_use]
    pub fn text_field(self, name: &'static str) -> Self {
        self.field(name, FieldType::Text)
    }

    #[must_use]
    pub fn numeric_field(self, name: &'static str) -> Self {
        self.field(name, FieldType::Numeric)
    }

    #[must_use]
    pub fn bool_field(self, name: &'static str) -> Self {
        self.field(name, FieldType::Bool)
    }

    #[must_use]
    pub fn list_field(self, name: &'static str) -> Self {
        self.field(name, FieldType::List)
    }

    /// Declare a persisted-identity field. The grammar rule comes with
    /// the declaration, so the field is checked on every validation of
    /// the owning type, not just inside the edge pipeline.
    #[must_use]
    pub fn reference_field(self, name: &'static str) -> Self {
        self.field(name, FieldType::Text)
            .rule(name, RuleKind::reference())
    }

    #[must_use]
    pub fn rule(mut self, field: &'static str, kind: RuleKind) -> Self {
        self.rules.push(FieldRule { field, kind });
        self
    }

    #[must_use]
    pub fn global<F>(mut self, check: F) -> Self
    where
        F: Fn(&T, &mut Report) + Send + Sync + 'static,
    {
        self.globals.push(GlobalRule::new(check));
        self
    }

    pub fn build(self) -> Result<RuleSet<T>, ConfigError> {
        for (i, (name, _)) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|(prev, _)| prev == name) {
                return Err(ConfigError::DuplicateField { field: name });
            }
        }

        for rule in &self.rules {
            let declared = self
                .fields
                .iter()
                .find(|(name, _)| *name == rule.field)
                .map(|(_, ty)| *ty)
                .ok_or(ConfigError::UnknownField { field: rule.field })?;

            if !rule.kind.compatible_with(declared) {
                return Err(ConfigError::IncompatibleRule {
                    field: rule.field,
                    rule: rule.kind.name(),
                    declared,
                });
            }

            if let Some(message) = rule.kind.config_error() {
                return Err(ConfigError::InvalidParams {
                    field: rule.field,
                    rule: rule.kind.name(),
                    message,
                });
            }
        }

        Ok(RuleSet {
            field_rules: self.rules,
            global_rules: self.globals,
        })
    }
}

///
/// TESTS
///
