use crate::{reference::Reference, traits::Validator};

///
/// WellFormed
///
/// Grammar check for persisted-identity fields: the value must parse as
/// a canonical `collection/key` reference.
///

#[derive(Clone, Copy, Debug)]
pub struct WellFormed;

impl Validator<str> for WellFormed {
    fn validate(&self, value: &str) -> Result<(), String> {
        match value.parse::<Reference>() {
            Ok(_) => Ok(()),
            Err(err) => Err(err.to_string()),
        }
    }
}

///
/// TESTS
///
