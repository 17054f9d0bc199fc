//! Numeric range bounds for remapping.

use serde::{Deserialize, Serialize};

/// A pair of floating-point bounds.
///
/// No invariant `start < end` is enforced: callers may supply degenerate
/// or inverted ranges. A zero-width range divides by zero in
/// [`fraction`](Range::fraction) and propagates infinities or NaN; an
/// inverted range simply scales with a negative span.
///
/// # Example
///
/// ```
/// use easemap::Range;
///
/// let input = Range::new(0.0, 10.0);
/// assert!((input.fraction(5.0) - 0.5).abs() < 1e-6);
///
/// let output = Range::new(0.0, 100.0);
/// assert!((output.lerp(0.5) - 50.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// First bound of the range.
    pub start: f32,
    /// Second bound of the range; may be below `start`.
    pub end: f32,
}

impl Range {
    /// The unit range `[0, 1]`.
    pub const UNIT: Range = Range {
        start: 0.0,
        end: 1.0,
    };

    /// Create a range from its two bounds.
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Signed width of the range: `end - start`.
    #[inline]
    pub fn span(self) -> f32 {
        self.end - self.start
    }

    /// Normalize `value` to a progress fraction relative to this range.
    ///
    /// Values outside the bounds produce fractions outside `[0,1]`; a
    /// zero-width range produces an infinity or NaN.
    #[inline]
    pub fn fraction(self, value: f32) -> f32 {
        (value - self.start) / self.span()
    }

    /// Denormalize a progress fraction into this range:
    /// `start + span * t`.
    #[inline]
    pub fn lerp(self, t: f32) -> f32 {
        self.start + self.span() * t
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<(f32, f32)> for Range {
    fn from((start, end): (f32, f32)) -> Self {
        Self { start, end }
    }
}
