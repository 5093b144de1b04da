//! # Planimetry Geometry
//!
//! Planar figures for the Planimetry toolkit. This crate provides:
//!
//! - **Measurements** ([`measurement`]): Strictly positive, finite lengths
//!   validated at assignment time.
//! - **Figures** ([`figures`]): Square, rectangle, parallelogram, triangle,
//!   trapeze, rhombus, kite and circle, each with its own fields, unified by
//!   the [`Planar`](figures::Planar) trait and the [`Figure`](figures::Figure)
//!   sum type.
//! - **Catalogue** ([`kind`]): The list of supported shapes, their field
//!   names and formulas.
//! - **Reports** ([`report`]): Locale-independent number formatting and the
//!   fixed-width report line.
//!
//! ## Formulas
//!
//! | Shape | Fields | Area | Perimeter |
//! |-------|--------|------|-----------|
//! | Square | a | a² | 4a |
//! | Rectangle | a, b | a·b | 2(a+b) |
//! | Parallelogram | a, b, h | b·h | 2(a+b) |
//! | Triangle | a, b, c, h | b·h/2 | a+b+c |
//! | Trapeze | a, b, c, d, h | (b+d)·h/2 | a+b+c+d |
//! | Rhombus | a, d1, d2 | d1·d2/2 | 4a |
//! | Kite | a, d1, d2, b | d1·d2/2 | 2(a+b) |
//! | Circle | r | π·r² | 2π·r |

pub mod error;
pub mod figures;
pub mod kind;
pub mod measurement;
pub mod report;

pub use error::FigureError;
pub use figures::{
    Circle, Figure, Kite, Parallelogram, Planar, Rectangle, Rhombus, Square, Trapeze, Triangle,
};
pub use kind::FigureKind;
pub use measurement::Measurement;
pub use report::{format_invariant, report_line, FigureReport};
