use crate::{report::Report, rule::RuleSet, value::Value};

///
/// Path
/// Stable entity path, used to attribute observability events.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// FieldValues
///
/// By-name field extraction. The engine's only view of an entity: an
/// opaque field-value source. Returning `None` (or `Value::Null`) marks
/// a field as absent, which exempts it from every builtin rule kind.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// ValidateAuto
///
/// The registration-produced rule set for this type. Built once, at
/// type-registration time, and shared read-only by every instance for
/// the life of the process (the usual shape is a `LazyLock` static).
///
/// `None` means the type declares no rule set; validation then runs
/// only the custom hook.
///

// The 'static bound backs the &'static rule-set return: rule sets live
// in per-type statics, so the type itself must not borrow.
pub trait ValidateAuto: FieldValues + Path + Sized + 'static {
    fn rule_set() -> Option<&'static RuleSet<Self>> {
        None
    }
}

///
/// ValidateCustom
///
/// Hand-authored validation hook, equivalent to a single global rule.
/// Reports issues through the shared `Report`; must not panic and must
/// not perform blocking I/O.
///

pub trait ValidateCustom {
    fn validate_custom(&self, _report: &mut Report) {}
}

///
/// Validate
///

pub trait Validate: ValidateAuto + ValidateCustom {}

impl<T> Validate for T where T: ValidateAuto + ValidateCustom {}

///
/// Validator
///
/// A single check primitive. All outcomes are expressed in the returned
/// message; evaluation itself never fails.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> Result<(), String>;
}
