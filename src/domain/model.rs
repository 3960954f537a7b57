use crate::domain::ports::Named;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One roster entry. `name` is intended to be unique but the list never
/// enforces that; name-based operations act on the first match in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub score: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32, score: f64) -> Self {
        Self {
            name: name.into(),
            age,
            score,
        }
    }
}

impl Named for Record {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {}, score {})", self.name, self.age, self.score)
    }
}

impl Validate for Record {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("record.name", &self.name)?;
        validate_finite_number("record.score", self.score)?;
        Ok(())
    }
}
