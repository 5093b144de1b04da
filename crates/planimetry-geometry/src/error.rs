//! Errors raised while building or modifying figures.

use thiserror::Error;

use crate::kind::FigureKind;

/// Errors from figure construction and measurement assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    /// A measurement was zero, negative, NaN or infinite.
    #[error("Invalid measurement for '{field}': {value} (must be a finite number > 0)")]
    InvalidMeasurement { field: &'static str, value: f64 },

    /// Generic construction got the wrong number of measurements.
    #[error("{kind} takes {expected} measurements, got {found}")]
    FieldCount {
        kind: FigureKind,
        expected: usize,
        found: usize,
    },

    /// A shape name did not match any supported figure type.
    #[error("Unknown figure type: {0}")]
    UnknownKind(String),
}
