use crate::{error::ValidateError, traits::Validate, validate::validate};
use thiserror::Error as ThisError;

///
/// EntityStore
///
/// The persistence collaborator. Only ever handed an entity that passed
/// validation; its errors flow back to the caller unmodified, never
/// reinterpreted as validation failures.
///

pub trait EntityStore<T> {
    type Error: std::error::Error;

    fn insert(&self, entity: T) -> Result<T, Self::Error>;
}

///
/// SaveError
///

#[derive(Debug, ThisError)]
pub enum SaveError<P> {
    #[error(transparent)]
    Validate(ValidateError),

    #[error(transparent)]
    Store(P),
}

///
/// save
///
/// Validate, then write. On aggregated failure the write is aborted
/// without the store ever seeing the entity; the caller corrects the
/// entity and retries.
///

pub fn save<T, S>(entity: T, store: &S) -> Result<T, SaveError<S::Error>>
where
    T: Validate,
    S: EntityStore<T>,
{
    if let Err(err) = validate(&entity) {
        return Err(SaveError::Validate(err));
    }

    store.insert(entity).map_err(SaveError::Store)
}

///
/// TESTS
///
