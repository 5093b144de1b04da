//! Planar figures.
//!
//! Each figure is an independent struct holding a display name and only the
//! measurements its formulas need. All of them implement [`Planar`], and
//! [`Figure`] wraps them in a single tagged sum type for heterogeneous
//! collections and serialisation.
//!
//! Fields are validated on construction and on every setter call. A failed
//! setter leaves the previous value in place.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FigureError;
use crate::kind::FigureKind;
use crate::measurement::Measurement;
use crate::report::report_line;

/// A named planar figure with an area and a perimeter.
pub trait Planar {
    /// Display name.
    fn name(&self) -> &str;

    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;

    /// Fixed-width report line, e.g.
    /// `S1            => Area......:     16.00000 Perimeter:     16.00000`.
    fn report(&self) -> String {
        report_line(self.name(), self.area(), self.perimeter())
    }
}

/// Getter and validated setter for each listed measurement field.
macro_rules! measurements {
    ($ty:ident { $($field:ident => $setter:ident),+ $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Current value of `", stringify!($field), "`.")]
                pub fn $field(&self) -> f64 {
                    self.$field.get()
                }

                #[doc = concat!("Assign `", stringify!($field), "`; rejected values leave it unchanged.")]
                pub fn $setter(&mut self, value: f64) -> Result<(), FigureError> {
                    self.$field = Measurement::new(stringify!($field), value)?;
                    Ok(())
                }
            )+
        }
    };
}

/// Deserialisation goes through an unvalidated mirror struct and the
/// variant's constructor, so a bad field is reported under its own name.
macro_rules! unvalidated {
    ($ty:ident from $raw:ident { $($field:ident),+ }) => {
        #[derive(Deserialize)]
        struct $raw {
            name: String,
            $($field: f64,)+
        }

        impl TryFrom<$raw> for $ty {
            type Error = FigureError;

            fn try_from(raw: $raw) -> Result<Self, Self::Error> {
                $ty::new(raw.name, $(raw.$field),+)
            }
        }
    };
}

/// `Display` renders the report line.
macro_rules! display_as_report {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.report())
                }
            }
        )+
    };
}

/// A square with side `a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    pub name: String,
    a: Measurement,
}

impl Square {
    pub fn new(name: impl Into<String>, a: f64) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
        })
    }
}

measurements!(Square { a => set_a });
unvalidated!(Square from RawSquare { a });

impl Planar for Square {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        self.a() * self.a()
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.a()
    }
}

/// A rectangle with sides `a` and `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    pub name: String,
    a: Measurement,
    b: Measurement,
}

impl Rectangle {
    pub fn new(name: impl Into<String>, a: f64, b: f64) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
            b: Measurement::new("b", b)?,
        })
    }
}

measurements!(Rectangle { a => set_a, b => set_b });
unvalidated!(Rectangle from RawRectangle { a, b });

impl Planar for Rectangle {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        self.a() * self.b()
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.a() + self.b())
    }
}

/// A parallelogram with sides `a`, `b` and height `h` onto base `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParallelogram")]
pub struct Parallelogram {
    pub name: String,
    a: Measurement,
    b: Measurement,
    h: Measurement,
}

impl Parallelogram {
    pub fn new(name: impl Into<String>, a: f64, b: f64, h: f64) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
            b: Measurement::new("b", b)?,
            h: Measurement::new("h", h)?,
        })
    }
}

measurements!(Parallelogram { a => set_a, b => set_b, h => set_h });
unvalidated!(Parallelogram from RawParallelogram { a, b, h });

impl Planar for Parallelogram {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        self.b() * self.h()
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.a() + self.b())
    }
}

/// A triangle with sides `a`, `b`, `c` and height `h` onto base `b`.
///
/// The sides are not checked against the triangle inequality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTriangle")]
pub struct Triangle {
    pub name: String,
    a: Measurement,
    b: Measurement,
    c: Measurement,
    h: Measurement,
}

impl Triangle {
    pub fn new(
        name: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
        h: f64,
    ) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
            b: Measurement::new("b", b)?,
            c: Measurement::new("c", c)?,
            h: Measurement::new("h", h)?,
        })
    }
}

measurements!(Triangle { a => set_a, b => set_b, c => set_c, h => set_h });
unvalidated!(Triangle from RawTriangle { a, b, c, h });

impl Planar for Triangle {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        (self.b() * self.h()) / 2.0
    }

    fn perimeter(&self) -> f64 {
        self.a() + self.b() + self.c()
    }
}

/// A trapeze (trapezoid) with sides `a`, `b`, `c`, `d`, parallel sides `b`
/// and `d`, and height `h`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrapeze")]
pub struct Trapeze {
    pub name: String,
    a: Measurement,
    b: Measurement,
    c: Measurement,
    d: Measurement,
    h: Measurement,
}

impl Trapeze {
    pub fn new(
        name: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        h: f64,
    ) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
            b: Measurement::new("b", b)?,
            c: Measurement::new("c", c)?,
            d: Measurement::new("d", d)?,
            h: Measurement::new("h", h)?,
        })
    }
}

measurements!(Trapeze { a => set_a, b => set_b, c => set_c, d => set_d, h => set_h });
unvalidated!(Trapeze from RawTrapeze { a, b, c, d, h });

impl Planar for Trapeze {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        ((self.b() + self.d()) * self.h()) / 2.0
    }

    fn perimeter(&self) -> f64 {
        self.a() + self.b() + self.c() + self.d()
    }
}

/// A rhombus with side `a` and diagonals `d1`, `d2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRhombus")]
pub struct Rhombus {
    pub name: String,
    a: Measurement,
    d1: Measurement,
    d2: Measurement,
}

impl Rhombus {
    pub fn new(name: impl Into<String>, a: f64, d1: f64, d2: f64) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
            d1: Measurement::new("d1", d1)?,
            d2: Measurement::new("d2", d2)?,
        })
    }
}

measurements!(Rhombus { a => set_a, d1 => set_d1, d2 => set_d2 });
unvalidated!(Rhombus from RawRhombus { a, d1, d2 });

impl Planar for Rhombus {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        (self.d1() * self.d2()) / 2.0
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.a()
    }
}

/// A kite with side pairs `a`, `b` and diagonals `d1`, `d2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKite")]
pub struct Kite {
    pub name: String,
    a: Measurement,
    d1: Measurement,
    d2: Measurement,
    b: Measurement,
}

impl Kite {
    pub fn new(
        name: impl Into<String>,
        a: f64,
        d1: f64,
        d2: f64,
        b: f64,
    ) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            a: Measurement::new("a", a)?,
            d1: Measurement::new("d1", d1)?,
            d2: Measurement::new("d2", d2)?,
            b: Measurement::new("b", b)?,
        })
    }
}

measurements!(Kite { a => set_a, d1 => set_d1, d2 => set_d2, b => set_b });
unvalidated!(Kite from RawKite { a, d1, d2, b });

impl Planar for Kite {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        (self.d1() * self.d2()) / 2.0
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.a() + self.b())
    }
}

/// A circle with radius `r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    pub name: String,
    r: Measurement,
}

impl Circle {
    pub fn new(name: impl Into<String>, r: f64) -> Result<Self, FigureError> {
        Ok(Self {
            name: name.into(),
            r: Measurement::new("r", r)?,
        })
    }
}

measurements!(Circle { r => set_r });
unvalidated!(Circle from RawCircle { r });

impl Planar for Circle {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        PI * self.r() * self.r()
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.r()
    }
}

display_as_report!(
    Square,
    Rectangle,
    Parallelogram,
    Triangle,
    Trapeze,
    Rhombus,
    Kite,
    Circle,
    Figure,
);

/// Any supported planar figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Figure {
    Square(Square),
    Rectangle(Rectangle),
    Parallelogram(Parallelogram),
    Triangle(Triangle),
    #[serde(alias = "trapezoid")]
    Trapeze(Trapeze),
    Rhombus(Rhombus),
    Kite(Kite),
    Circle(Circle),
}

impl Figure {
    /// Build a figure of the given kind from its measurements, listed in the
    /// order of [`FigureKind::fields`].
    pub fn from_measurements(
        kind: FigureKind,
        name: impl Into<String>,
        values: &[f64],
    ) -> Result<Self, FigureError> {
        let name = name.into();
        let figure = match (kind, values) {
            (FigureKind::Square, &[a]) => Square::new(name, a)?.into(),
            (FigureKind::Rectangle, &[a, b]) => Rectangle::new(name, a, b)?.into(),
            (FigureKind::Parallelogram, &[a, b, h]) => Parallelogram::new(name, a, b, h)?.into(),
            (FigureKind::Triangle, &[a, b, c, h]) => Triangle::new(name, a, b, c, h)?.into(),
            (FigureKind::Trapeze, &[a, b, c, d, h]) => Trapeze::new(name, a, b, c, d, h)?.into(),
            (FigureKind::Rhombus, &[a, d1, d2]) => Rhombus::new(name, a, d1, d2)?.into(),
            (FigureKind::Kite, &[a, d1, d2, b]) => Kite::new(name, a, d1, d2, b)?.into(),
            (FigureKind::Circle, &[r]) => Circle::new(name, r)?.into(),
            _ => {
                return Err(FigureError::FieldCount {
                    kind,
                    expected: kind.fields().len(),
                    found: values.len(),
                })
            }
        };
        Ok(figure)
    }

    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Square(_) => FigureKind::Square,
            Figure::Rectangle(_) => FigureKind::Rectangle,
            Figure::Parallelogram(_) => FigureKind::Parallelogram,
            Figure::Triangle(_) => FigureKind::Triangle,
            Figure::Trapeze(_) => FigureKind::Trapeze,
            Figure::Rhombus(_) => FigureKind::Rhombus,
            Figure::Kite(_) => FigureKind::Kite,
            Figure::Circle(_) => FigureKind::Circle,
        }
    }

    fn as_planar(&self) -> &dyn Planar {
        match self {
            Figure::Square(f) => f,
            Figure::Rectangle(f) => f,
            Figure::Parallelogram(f) => f,
            Figure::Triangle(f) => f,
            Figure::Trapeze(f) => f,
            Figure::Rhombus(f) => f,
            Figure::Kite(f) => f,
            Figure::Circle(f) => f,
        }
    }
}

impl Planar for Figure {
    fn name(&self) -> &str {
        self.as_planar().name()
    }

    fn area(&self) -> f64 {
        self.as_planar().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_planar().perimeter()
    }
}

macro_rules! figure_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Figure {
                fn from(f: $variant) -> Self {
                    Figure::$variant(f)
                }
            }
        )+
    };
}

figure_from!(Square, Rectangle, Parallelogram, Triangle, Trapeze, Rhombus, Kite, Circle);
