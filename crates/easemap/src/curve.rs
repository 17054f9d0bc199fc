//! Curve families and easing directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ease;
use crate::error::EaseError;
use crate::lut::EaseLut;
use crate::range::Range;

/// The nine curve families of the easing catalog.
///
/// Each family (except [`Curve::Linear`], which has none) comes in three
/// directional variants selected by [`Direction`]. Evaluation is a pure
/// dispatch over (family, direction) to a closed-form formula and
/// performs no validation.
///
/// # Example
///
/// ```
/// use easemap::{Curve, Direction};
///
/// let eased = Curve::Quadratic.ease(Direction::In, 0.5);
/// assert!((eased - 0.25).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    /// Identity mapping; the direction has no effect.
    #[default]
    Linear,
    /// Power curve `t²`.
    Quadratic,
    /// Power curve `t³`.
    Cubic,
    /// Power curve `t⁴`.
    Quartic,
    /// Power curve `t⁵`.
    Quintic,
    /// Quarter-period sine/cosine curve.
    Sinusoidal,
    /// Base-2 exponential curve `2^(10(t-1))` and mirrors.
    ///
    /// Carries the classic `2^-10` boundary artifact: the ease-in variant
    /// does not pass exactly through the lower endpoint.
    Exponential,
    /// Quarter-circle arc curve.
    Circular,
    /// Power curve `t^0.5`; the fixed-exponent instance of the generic
    /// power family used by [`map_with_exponent`](crate::map_with_exponent).
    SquareRoot,
}

impl Curve {
    /// Every family in the catalog, in selector order.
    pub const ALL: [Curve; 9] = [
        Curve::Linear,
        Curve::Quadratic,
        Curve::Cubic,
        Curve::Quartic,
        Curve::Quintic,
        Curve::Sinusoidal,
        Curve::Exponential,
        Curve::Circular,
        Curve::SquareRoot,
    ];

    /// Stable numeric selector for this family (`0..=8`).
    ///
    /// Selectors match the catalog's historical wire encoding; the inverse
    /// conversion is `Curve::try_from(u8)`.
    pub const fn as_u8(self) -> u8 {
        match self {
            Curve::Linear => 0,
            Curve::Quadratic => 1,
            Curve::Cubic => 2,
            Curve::Quartic => 3,
            Curve::Quintic => 4,
            Curve::Sinusoidal => 5,
            Curve::Exponential => 6,
            Curve::Circular => 7,
            Curve::SquareRoot => 8,
        }
    }

    /// Canonical lowercase name for this family.
    pub const fn as_str(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::Quadratic => "quadratic",
            Curve::Cubic => "cubic",
            Curve::Quartic => "quartic",
            Curve::Quintic => "quintic",
            Curve::Sinusoidal => "sinusoidal",
            Curve::Exponential => "exponential",
            Curve::Circular => "circular",
            Curve::SquareRoot => "square-root",
        }
    }

    /// Evaluate this family's easing at progress fraction `t`.
    ///
    /// `t` is nominally in `[0,1]` but is neither clamped nor validated;
    /// out-of-range and non-finite input propagates per IEEE-754. The
    /// direction is ignored for [`Curve::Linear`].
    pub fn ease(self, direction: Direction, t: f32) -> f32 {
        match self {
            Curve::Linear => ease::linear(t),
            Curve::Quadratic => match direction {
                Direction::In => ease::quadratic_in(t),
                Direction::Out => ease::quadratic_out(t),
                Direction::InOut => ease::quadratic_in_out(t),
            },
            Curve::Cubic => match direction {
                Direction::In => ease::cubic_in(t),
                Direction::Out => ease::cubic_out(t),
                Direction::InOut => ease::cubic_in_out(t),
            },
            Curve::Quartic => match direction {
                Direction::In => ease::quartic_in(t),
                Direction::Out => ease::quartic_out(t),
                Direction::InOut => ease::quartic_in_out(t),
            },
            Curve::Quintic => match direction {
                Direction::In => ease::quintic_in(t),
                Direction::Out => ease::quintic_out(t),
                Direction::InOut => ease::quintic_in_out(t),
            },
            Curve::Sinusoidal => match direction {
                Direction::In => ease::sinusoidal_in(t),
                Direction::Out => ease::sinusoidal_out(t),
                Direction::InOut => ease::sinusoidal_in_out(t),
            },
            Curve::Exponential => match direction {
                Direction::In => ease::exponential_in(t),
                Direction::Out => ease::exponential_out(t),
                Direction::InOut => ease::exponential_in_out(t),
            },
            Curve::Circular => match direction {
                Direction::In => ease::circular_in(t),
                Direction::Out => ease::circular_out(t),
                Direction::InOut => ease::circular_in_out(t),
            },
            Curve::SquareRoot => match direction {
                Direction::In => ease::square_root_in(t),
                Direction::Out => ease::square_root_out(t),
                Direction::InOut => ease::square_root_in_out(t),
            },
        }
    }

    /// Remap `value` from `input` to `output` along this family's curve.
    ///
    /// Convenience method delegating to [`map()`](crate::map()).
    pub fn map(self, value: f32, input: Range, output: Range, direction: Direction) -> f32 {
        crate::map::map(value, input, output, self, direction)
    }

    /// Precompute this (family, direction) pair into an [`EaseLut`].
    pub fn to_lut(self, direction: Direction) -> EaseLut {
        EaseLut::from_curve(self, direction)
    }
}

impl TryFrom<u8> for Curve {
    type Error = EaseError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Curve::Linear),
            1 => Ok(Curve::Quadratic),
            2 => Ok(Curve::Cubic),
            3 => Ok(Curve::Quartic),
            4 => Ok(Curve::Quintic),
            5 => Ok(Curve::Sinusoidal),
            6 => Ok(Curve::Exponential),
            7 => Ok(Curve::Circular),
            8 => Ok(Curve::SquareRoot),
            other => Err(EaseError::UnknownCurve(other)),
        }
    }
}

impl FromStr for Curve {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Curve::Linear),
            "quadratic" => Ok(Curve::Quadratic),
            "cubic" => Ok(Curve::Cubic),
            "quartic" => Ok(Curve::Quartic),
            "quintic" => Ok(Curve::Quintic),
            "sinusoidal" => Ok(Curve::Sinusoidal),
            "exponential" => Ok(Curve::Exponential),
            "circular" => Ok(Curve::Circular),
            "square-root" | "square_root" | "sqrt" => Ok(Curve::SquareRoot),
            other => Err(EaseError::UnknownCurveName(other.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the non-linearity of a curve is concentrated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Acceleration at the start of the curve.
    #[default]
    In,
    /// Deceleration at the end of the curve.
    Out,
    /// Split at the domain midpoint: ease-in for the first half, a
    /// mirrored ease-out for the second, continuous at the boundary.
    InOut,
}

impl Direction {
    /// Every direction, in selector order.
    pub const ALL: [Direction; 3] = [Direction::In, Direction::Out, Direction::InOut];

    /// Stable numeric selector for this direction (`0..=2`).
    pub const fn as_u8(self) -> u8 {
        match self {
            Direction::In => 0,
            Direction::Out => 1,
            Direction::InOut => 2,
        }
    }

    /// Canonical lowercase name for this direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "in-out",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EaseError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Direction::In),
            1 => Ok(Direction::Out),
            2 => Ok(Direction::InOut),
            other => Err(EaseError::UnknownDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            "in-out" | "in_out" | "inout" => Ok(Direction::InOut),
            other => Err(EaseError::UnknownDirectionName(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
