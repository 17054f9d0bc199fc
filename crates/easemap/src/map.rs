//! Eased range remapping.
//!
//! The two entry points remap a scalar from an input range to an output
//! range along a non-linear curve: [`map`] selects a curve from the named
//! catalog, [`map_with_exponent`] uses the generic power curve with a
//! caller-supplied exponent. Both are pure and never fail: degenerate
//! ranges and undefined powers propagate IEEE-754 infinities and NaNs
//! instead of being rejected, and outputs are not clamped. Callers own
//! validation and clamping.

use crate::curve::{Curve, Direction};
use crate::ease;
use crate::range::Range;

/// Remap `value` from `input` to `output` along a named curve family.
///
/// `value` is not required to lie inside `input`; fractions outside
/// `[0,1]` are eased as-is. The `direction` is ignored when `curve` is
/// [`Curve::Linear`].
///
/// # Arguments
///
/// * `value` - The sample point to remap
/// * `input` - Input range bounds
/// * `output` - Output range bounds
/// * `curve` - Curve family to ease along
/// * `direction` - Where the non-linearity is concentrated
///
/// # Example
///
/// ```
/// use easemap::{map, Curve, Direction, Range};
///
/// let eased = map(
///     5.0,
///     Range::new(0.0, 10.0),
///     Range::new(0.0, 100.0),
///     Curve::Quadratic,
///     Direction::In,
/// );
/// assert!((eased - 25.0).abs() < 1e-5);
/// ```
#[inline]
pub fn map(value: f32, input: Range, output: Range, curve: Curve, direction: Direction) -> f32 {
    output.lerp(curve.ease(direction, input.fraction(value)))
}

/// Remap `value` from `input` to `output` along a generic power curve.
///
/// Generalizes the [`Curve::SquareRoot`] family to an arbitrary real
/// `exponent` (e.g. `0.5`, `0.1`, `2.2`). When the normalized fraction is
/// negative and `exponent` is fractional, the power is undefined and NaN
/// is propagated rather than raised as an error.
///
/// # Arguments
///
/// * `value` - The sample point to remap
/// * `input` - Input range bounds
/// * `output` - Output range bounds
/// * `exponent` - Power applied to the normalized fraction
/// * `direction` - Where the non-linearity is concentrated
///
/// # Example
///
/// ```
/// use easemap::{map_with_exponent, Direction, Range};
///
/// let eased = map_with_exponent(
///     2.5,
///     Range::new(0.0, 10.0),
///     Range::new(0.0, 1.0),
///     2.0,
///     Direction::In,
/// );
/// assert!((eased - 0.0625).abs() < 1e-5);
/// ```
#[inline]
pub fn map_with_exponent(
    value: f32,
    input: Range,
    output: Range,
    exponent: f32,
    direction: Direction,
) -> f32 {
    let t = input.fraction(value);
    let eased = match direction {
        Direction::In => ease::power_in(t, exponent),
        Direction::Out => ease::power_out(t, exponent),
        Direction::InOut => ease::power_in_out(t, exponent),
    };
    output.lerp(eased)
}
