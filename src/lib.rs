//! # Planimetry
//!
//! Area and perimeter of planar figures with validated measurements.
//!
//! This facade re-exports [`planimetry_geometry`]. The command-line front end
//! lives in the `planimetry-cli` crate.
//!
//! ```
//! use planimetry::{Planar, Rectangle};
//!
//! let r = Rectangle::new("R1", 3.0, 5.0).unwrap();
//! assert_eq!(r.area(), 15.0);
//! assert_eq!(
//!     r.to_string(),
//!     "R1            => Area......:     15.00000 Perimeter:     16.00000"
//! );
//! ```

pub use planimetry_geometry::*;
