use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// Reference
///
/// Opaque persisted identity of an existing entity, in the canonical
/// `collection/key` form. Produced only by successful prior creation;
/// never mutated afterward. Both segments are non-empty and contain no
/// embedded separator.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{collection}/{key}")]
#[serde(try_from = "String", into = "String")]
pub struct Reference {
    collection: String,
    key: String,
}

impl Reference {
    pub fn new(
        collection: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, ReferenceError> {
        let collection = collection.into();
        let key = key.into();

        if collection.is_empty() && key.is_empty() {
            return Err(ReferenceError::Empty);
        }
        if collection.is_empty() {
            return Err(ReferenceError::EmptyCollection(format!("/{key}")));
        }
        if key.is_empty() {
            return Err(ReferenceError::EmptyKey(format!("{collection}/")));
        }
        if collection.contains('/') || key.contains('/') {
            return Err(ReferenceError::ExtraSeparator(format!("{collection}/{key}")));
        }

        Ok(Self { collection, key })
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for Reference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }

        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(collection), Some(key), None) => {
                if collection.is_empty() {
                    Err(ReferenceError::EmptyCollection(s.to_string()))
                } else if key.is_empty() {
                    Err(ReferenceError::EmptyKey(s.to_string()))
                } else {
                    Ok(Self {
                        collection: collection.to_string(),
                        key: key.to_string(),
                    })
                }
            }
            (Some(_), None, _) => Err(ReferenceError::MissingSeparator(s.to_string())),
            _ => Err(ReferenceError::ExtraSeparator(s.to_string())),
        }
    }
}

impl TryFrom<String> for Reference {
    type Error = ReferenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.to_string()
    }
}

impl From<&Reference> for Value {
    fn from(reference: &Reference) -> Self {
        Self::Text(reference.to_string())
    }
}

///
/// ReferenceError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReferenceError {
    #[error("reference must not be empty")]
    Empty,

    #[error("reference '{0}' has an empty collection segment")]
    EmptyCollection(String),

    #[error("reference '{0}' has an empty key segment")]
    EmptyKey(String),

    #[error("reference '{0}' contains more than one '/' separator")]
    ExtraSeparator(String),

    #[error("reference '{0}' is missing the '/' separator")]
    MissingSeparator(String),
}

///
/// TESTS
///
