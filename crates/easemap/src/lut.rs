//! Pre-computed easing tables.

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, Direction};
use crate::ease;

/// A sampled easing curve with O(1) interpolated lookup.
///
/// The table holds one (family, direction) pair sampled at 256 evenly
/// spaced points over the unit interval, with linear interpolation between
/// entries. Lookups allocate nothing and run in bounded time, so a table
/// built once can be queried from a hot loop without re-evaluating the
/// closed-form curve.
///
/// Unlike the pure evaluation paths, [`lookup`](EaseLut::lookup) clamps its
/// input to `[0,1]`, since the table has no samples outside the unit
/// interval. This is the only clamping site in the crate.
///
/// # Example
///
/// ```
/// use easemap::{Curve, Direction, EaseLut};
///
/// let lut = EaseLut::from_curve(Curve::Quadratic, Direction::In);
/// let eased = lut.lookup(0.5);
/// assert!((eased - 0.25).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EaseLut {
    table: [f32; 256],
}

impl EaseLut {
    /// Number of table entries.
    pub const SIZE: usize = 256;

    /// Sample a catalog curve into a table.
    pub fn from_curve(curve: Curve, direction: Direction) -> Self {
        Self::from_fn(|t| curve.ease(direction, t))
    }

    /// Sample the generic power curve into a table.
    pub fn from_exponent(exponent: f32, direction: Direction) -> Self {
        Self::from_fn(|t| match direction {
            Direction::In => ease::power_in(t, exponent),
            Direction::Out => ease::power_out(t, exponent),
            Direction::InOut => ease::power_in_out(t, exponent),
        })
    }

    /// Build a table from an arbitrary unit-interval function.
    ///
    /// Samples are stored as returned, with no clamping or sanitizing, so
    /// a function that produces NaN bakes NaN into the table.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        let mut table = [0.0f32; Self::SIZE];

        for (i, entry) in table.iter_mut().enumerate() {
            let t = i as f32 / (Self::SIZE - 1) as f32;
            *entry = f(t);
        }

        Self { table }
    }

    /// Create an identity (linear) table.
    pub fn linear() -> Self {
        Self::from_fn(ease::linear)
    }

    /// Interpolated lookup at progress fraction `t` (clamped to `[0,1]`).
    #[inline]
    pub fn lookup(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        let scaled = t * (Self::SIZE - 1) as f32;
        let index_low = (scaled as usize).min(Self::SIZE - 2);
        let index_high = index_low + 1;
        let fraction = scaled - index_low as f32;

        let low_value = self.table[index_low];
        let high_value = self.table[index_high];

        low_value + fraction * (high_value - low_value)
    }

    /// Raw table access, primarily for tests and debugging.
    pub fn table(&self) -> &[f32; 256] {
        &self.table
    }

    /// Whether the samples are non-decreasing.
    pub fn is_monotonic(&self) -> bool {
        for i in 1..Self::SIZE {
            if self.table[i] < self.table[i - 1] {
                return false;
            }
        }
        true
    }

    /// Minimum sampled value.
    pub fn min_value(&self) -> f32 {
        self.table.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Maximum sampled value.
    pub fn max_value(&self) -> f32 {
        self.table.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

impl Default for EaseLut {
    fn default() -> Self {
        Self::linear()
    }
}

impl Serialize for EaseLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EaseLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<f32> = Vec::deserialize(deserializer)?;
        if vec.len() != 256 {
            return Err(serde::de::Error::custom(format!(
                "Expected 256 entries in EaseLut, got {}",
                vec.len()
            )));
        }
        let mut table = [0.0f32; 256];
        table.copy_from_slice(&vec);
        Ok(EaseLut { table })
    }
}
