use crate::traits::Validator;
use num_traits::ToPrimitive;

fn cast_target<N: ToPrimitive>(target: &N) -> Result<f64, String> {
    match target.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(format!(
            "target of type {} cannot be represented as a finite f64",
            core::any::type_name::<N>()
        )),
    }
}

///
/// Lt
///

#[derive(Clone, Debug)]
pub struct Lt {
    target: f64,
    error: Option<String>,
}

impl Lt {
    pub fn new<N: ToPrimitive>(target: N) -> Self {
        match cast_target(&target) {
            Ok(target) => Self {
                target,
                error: None,
            },
            Err(e) => Self {
                target: 0.0,
                error: Some(e),
            },
        }
    }

    pub(crate) fn config_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Validator<f64> for Lt {
    fn validate(&self, value: &f64) -> Result<(), String> {
        if *value < self.target {
            Ok(())
        } else {
            Err(format!("{value} must be < {}", self.target))
        }
    }
}

///
/// Gt
///

#[derive(Clone, Debug)]
pub struct Gt {
    target: f64,
    error: Option<String>,
}

impl Gt {
    pub fn new<N: ToPrimitive>(target: N) -> Self {
        match cast_target(&target) {
            Ok(target) => Self {
                target,
                error: None,
            },
            Err(e) => Self {
                target: 0.0,
                error: Some(e),
            },
        }
    }

    pub(crate) fn config_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Validator<f64> for Gt {
    fn validate(&self, value: &f64) -> Result<(), String> {
        if *value > self.target {
            Ok(())
        } else {
            Err(format!("{value} must be > {}", self.target))
        }
    }
}

///
/// Lte
///

#[derive(Clone, Debug)]
pub struct Lte {
    target: f64,
    error: Option<String>,
}

impl Lte {
    pub fn new<N: ToPrimitive>(target: N) -> Self {
        match cast_target(&target) {
            Ok(target) => Self {
                target,
                error: None,
            },
            Err(e) => Self {
                target: 0.0,
                error: Some(e),
            },
        }
    }

    pub(crate) fn config_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Validator<f64> for Lte {
    fn validate(&self, value: &f64) -> Result<(), String> {
        if *value <= self.target {
            Ok(())
        } else {
            Err(format!("{value} must be <= {}", self.target))
        }
    }
}

///
/// Gte
///

#[derive(Clone, Debug)]
pub struct Gte {
    target: f64,
    error: Option<String>,
}

impl Gte {
    pub fn new<N: ToPrimitive>(target: N) -> Self {
        match cast_target(&target) {
            Ok(target) => Self {
                target,
                error: None,
            },
            Err(e) => Self {
                target: 0.0,
                error: Some(e),
            },
        }
    }

    pub(crate) fn config_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Validator<f64> for Gte {
    fn validate(&self, value: &f64) -> Result<(), String> {
        if *value >= self.target {
            Ok(())
        } else {
            Err(format!("{value} must be >= {}", self.target))
        }
    }
}

///
/// TESTS
///
