use crate::traits::Validator;

///
/// HasLen
///

#[allow(clippy::len_without_is_empty)]
pub trait HasLen {
    fn len(&self) -> usize;
}

impl HasLen for str {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl HasLen for String {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T> HasLen for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> HasLen for Vec<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

///
/// Equal
///

#[derive(Clone, Copy, Debug)]
pub struct Equal {
    target: usize,
}

impl Equal {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<T: HasLen + ?Sized> Validator<T> for Equal {
    fn validate(&self, t: &T) -> Result<(), String> {
        let len = t.len();
        if len == self.target {
            Ok(())
        } else {
            Err(format!("length ({len}) is not equal to {}", self.target))
        }
    }
}

///
/// Min
///

#[derive(Clone, Copy, Debug)]
pub struct Min {
    target: usize,
}

impl Min {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<T: HasLen + ?Sized> Validator<T> for Min {
    fn validate(&self, t: &T) -> Result<(), String> {
        let len = t.len();
        if len < self.target {
            Err(format!(
                "length ({len}) is lower than minimum of {}",
                self.target
            ))
        } else {
            Ok(())
        }
    }
}

///
/// Max
///

#[derive(Clone, Copy, Debug)]
pub struct Max {
    target: usize,
}

impl Max {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<T: HasLen + ?Sized> Validator<T> for Max {
    fn validate(&self, t: &T) -> Result<(), String> {
        let len = t.len();
        if len > self.target {
            Err(format!(
                "length ({len}) is greater than maximum of {}",
                self.target
            ))
        } else {
            Ok(())
        }
    }
}

///
/// TESTS
///
