//! Catalogue of supported figure types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FigureError;

/// The type of a planar figure, independent of its measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Square,
    Rectangle,
    Parallelogram,
    Triangle,
    #[serde(alias = "trapezoid")]
    Trapeze,
    Rhombus,
    Kite,
    Circle,
}

impl FigureKind {
    /// Every supported kind, in catalogue order.
    pub const ALL: [FigureKind; 8] = [
        FigureKind::Square,
        FigureKind::Rectangle,
        FigureKind::Parallelogram,
        FigureKind::Triangle,
        FigureKind::Trapeze,
        FigureKind::Rhombus,
        FigureKind::Kite,
        FigureKind::Circle,
    ];

    /// Lowercase identifier used in job files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            FigureKind::Square => "square",
            FigureKind::Rectangle => "rectangle",
            FigureKind::Parallelogram => "parallelogram",
            FigureKind::Triangle => "triangle",
            FigureKind::Trapeze => "trapeze",
            FigureKind::Rhombus => "rhombus",
            FigureKind::Kite => "kite",
            FigureKind::Circle => "circle",
        }
    }

    /// Measurement field names in constructor order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            FigureKind::Square => &["a"],
            FigureKind::Rectangle => &["a", "b"],
            FigureKind::Parallelogram => &["a", "b", "h"],
            FigureKind::Triangle => &["a", "b", "c", "h"],
            FigureKind::Trapeze => &["a", "b", "c", "d", "h"],
            FigureKind::Rhombus => &["a", "d1", "d2"],
            FigureKind::Kite => &["a", "d1", "d2", "b"],
            FigureKind::Circle => &["r"],
        }
    }

    pub fn area_formula(self) -> &'static str {
        match self {
            FigureKind::Square => "a²",
            FigureKind::Rectangle => "a·b",
            FigureKind::Parallelogram => "b·h",
            FigureKind::Triangle => "b·h/2",
            FigureKind::Trapeze => "(b+d)·h/2",
            FigureKind::Rhombus | FigureKind::Kite => "d1·d2/2",
            FigureKind::Circle => "π·r²",
        }
    }

    pub fn perimeter_formula(self) -> &'static str {
        match self {
            FigureKind::Square | FigureKind::Rhombus => "4a",
            FigureKind::Rectangle | FigureKind::Parallelogram | FigureKind::Kite => "2(a+b)",
            FigureKind::Triangle => "a+b+c",
            FigureKind::Trapeze => "a+b+c+d",
            FigureKind::Circle => "2π·r",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureKind {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "trapezoid" {
            return Ok(FigureKind::Trapeze);
        }
        FigureKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| FigureError::UnknownKind(s.to_string()))
    }
}
