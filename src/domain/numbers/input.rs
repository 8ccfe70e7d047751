//! InputVector - the five validated numbers of one submission.

use serde::{Deserialize, Serialize};

use super::form::{NumberForm, FIELD_NAMES};
use crate::domain::foundation::ValidationError;

/// Number of values every submission carries.
pub const INPUT_LEN: usize = 5;

/// Five signed numbers `[a, b, c, d, e]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputVector([f64; INPUT_LEN]);

impl InputVector {
    /// Wraps five already-validated values.
    pub fn new(values: [f64; INPUT_LEN]) -> Self {
        Self(values)
    }

    /// Validates a submitted form.
    ///
    /// Every field must be present and parse as a finite number once
    /// surrounding whitespace is dropped. The first offending field, in
    /// `a..e` order, is reported.
    pub fn parse(form: &NumberForm) -> Result<Self, ValidationError> {
        let mut values = [0.0; INPUT_LEN];
        for (slot, name) in values.iter_mut().zip(FIELD_NAMES) {
            *slot = parse_field(name, form.field(name))?;
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64; INPUT_LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

fn parse_field(name: &str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ValidationError::missing_field(name));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::not_a_number(name, text)),
    }
}
