//! Prelude for the easemap crate.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```
//! use easemap::prelude::*;
//!
//! let eased = map(
//!     5.0,
//!     Range::new(0.0, 10.0),
//!     Range::new(0.0, 100.0),
//!     Curve::Quadratic,
//!     Direction::In,
//! );
//! assert!((eased - 25.0).abs() < 1e-5);
//! ```

pub use crate::curve::{Curve, Direction};
pub use crate::error::EaseError;
pub use crate::lut::EaseLut;
pub use crate::map::{map, map_with_exponent};
pub use crate::range::Range;
