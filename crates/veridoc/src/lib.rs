//! Veridoc: declarative model validation and edge linking for document
//! records.
//!
//! ## Crate layout
//! - `core`: field values, rule sets, the validation engine, references,
//!   edge linking, and observability.
//!
//! The `prelude` module mirrors the surface a host application uses to
//! declare rule sets and validate entities and edges.

pub use veridoc_core as core;

pub use veridoc_core::{
    ConfigError, Error, FieldRule, FieldType, GlobalRule, Reference, ReferenceError, Report,
    RuleKind, RuleSet, RuleSetBuilder, ValidateError, Value, validate,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        error::{ConfigError, Error, ValidateError},
        link::{EdgeValue, link, validate_edge},
        reference::{Reference, ReferenceError},
        report::Report,
        rule::{FieldType, RuleKind, RuleSet},
        store::{EntityStore, SaveError, save},
        traits::{FieldValues, Path, Validate as _, ValidateAuto, ValidateCustom},
        validate::validate,
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}
