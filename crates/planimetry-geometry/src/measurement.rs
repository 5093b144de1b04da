//! Validated measurement values.
//!
//! Every length a figure is built from (side, diagonal, height, radius) is a
//! [`Measurement`]: a finite `f64` strictly greater than zero. The only way
//! to obtain one is through [`Measurement::new`], so a figure can never hold
//! an invalid field. Figures deserialise through their constructors, so the
//! field name reported on failure is always the real one.

use serde::Serialize;

use crate::error::FigureError;

/// A strictly positive, finite length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Measurement(f64);

impl Measurement {
    /// Validate `value` for the field named `field`.
    ///
    /// NaN fails the `> 0` comparison on its own; infinities are rejected
    /// explicitly.
    pub fn new(field: &'static str, value: f64) -> Result<Self, FigureError> {
        if value > 0.0 && value.is_finite() {
            Ok(Self(value))
        } else {
            Err(FigureError::InvalidMeasurement { field, value })
        }
    }

    /// The underlying value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Measurement> for f64 {
    fn from(m: Measurement) -> Self {
        m.0
    }
}
