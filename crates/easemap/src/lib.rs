//! Eased Range Remapping
//!
//! This crate remaps a scalar value from one numeric range to another
//! along a non-linear easing curve, using the classic closed-form easing
//! equations.
//!
//! # Overview
//!
//! The catalog supports nine curve families:
//! - **Linear**: identity mapping (direction has no effect)
//! - **Quadratic / Cubic / Quartic / Quintic**: integer power curves
//! - **Sinusoidal**: quarter-period trigonometric curve
//! - **Exponential**: base-2 exponential curve
//! - **Circular**: quarter-circle arc
//! - **SquareRoot**: the power curve at exponent 0.5
//!
//! plus a generic power curve with a caller-supplied exponent
//! ([`map_with_exponent`]). Every family except Linear comes in three
//! directional variants: ease-in, ease-out, and ease-in-out.
//!
//! # Purity Guarantees
//!
//! All evaluation paths are pure functions:
//! - No heap allocations
//! - No shared or mutable state; safe to call from any thread
//! - No validation and no clamping; degenerate ranges and undefined
//!   powers propagate IEEE-754 infinities/NaNs to the caller
//!
//! For hot loops, [`EaseLut`] pre-computes a (curve, direction) pair into
//! a 256-entry table with O(1) interpolated lookup.
//!
//! # Example
//!
//! ```
//! use easemap::{map, Curve, Direction, Range};
//!
//! // Remap 5.0 from [0,10] into [0,100] along a quadratic ease-in.
//! let eased = map(
//!     5.0,
//!     Range::new(0.0, 10.0),
//!     Range::new(0.0, 100.0),
//!     Curve::Quadratic,
//!     Direction::In,
//! );
//! assert!((eased - 25.0).abs() < 1e-5);
//!
//! // The generic power curve takes any real exponent.
//! use easemap::map_with_exponent;
//! let eased = map_with_exponent(
//!     2.5,
//!     Range::new(0.0, 10.0),
//!     Range::new(0.0, 1.0),
//!     2.0,
//!     Direction::In,
//! );
//! assert!((eased - 0.0625).abs() < 1e-5);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod ease;
pub mod error;
pub mod lut;
pub mod map;
pub mod prelude;
pub mod range;

pub use curve::{Curve, Direction};
pub use error::EaseError;
pub use lut::EaseLut;
pub use map::{map, map_with_exponent};
pub use range::Range;
