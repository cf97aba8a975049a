//! Core runtime for Veridoc: field values, rule sets, the validation engine,
//! persisted-identity references, and edge linking.

// public exports are one module level down
pub mod error;
pub mod link;
pub mod obs;
pub mod reference;
pub mod report;
pub mod rule;
pub mod store;
pub mod traits;
pub mod validate;
pub mod validator;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{ConfigError, Error, ValidateError};
pub use reference::{Reference, ReferenceError};
pub use report::Report;
pub use rule::{FieldRule, FieldType, GlobalRule, RuleKind, RuleSet, RuleSetBuilder};
pub use validate::validate;
pub use value::Value;

///
/// Prelude
///
/// Prelude contains the domain vocabulary: entity traits, rule types,
/// the engine entry points, and the persistence boundary. Observability
/// sinks stay behind their module path.
///

pub mod prelude {
    pub use crate::{
        error::{ConfigError, Error, ValidateError},
        link::{EdgeValue, link, validate_edge},
        reference::Reference,
        report::Report,
        rule::{FieldType, RuleKind, RuleSet},
        store::{EntityStore, SaveError, save},
        traits::{FieldValues, Path, Validate, ValidateAuto, ValidateCustom},
        validate::validate,
        value::Value,
    };
}
