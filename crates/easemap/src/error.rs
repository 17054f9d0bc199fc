//! Error types for selector conversions.

/// Error type for curve and direction selector conversions.
///
/// Evaluation and mapping never fail: degenerate numeric input propagates
/// IEEE-754 infinities and NaNs instead (see [`map()`](crate::map())). The only
/// fallible operations are decoding a [`Curve`](crate::Curve) or
/// [`Direction`](crate::Direction) from its numeric selector or its name,
/// and those return this error rather than falling back to a silent
/// default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EaseError {
    /// Numeric curve selector outside the catalog.
    #[error("unknown curve selector {0} (expected 0..=8)")]
    UnknownCurve(u8),

    /// Numeric direction selector outside the catalog.
    #[error("unknown direction selector {0} (expected 0..=2)")]
    UnknownDirection(u8),

    /// Curve name that does not match any family.
    #[error("unrecognized curve name '{0}'")]
    UnknownCurveName(String),

    /// Direction name that does not match any variant.
    #[error("unrecognized direction name '{0}'")]
    UnknownDirectionName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_curve() {
        let err = EaseError::UnknownCurve(9);
        let msg = format!("{}", err);
        assert!(msg.contains("unknown curve selector 9"));
        assert!(msg.contains("0..=8"));
    }

    #[test]
    fn test_error_display_unknown_direction() {
        let err = EaseError::UnknownDirection(3);
        let msg = format!("{}", err);
        assert!(msg.contains("unknown direction selector 3"));
    }

    #[test]
    fn test_error_display_unknown_names() {
        let err = EaseError::UnknownCurveName("bounce".to_string());
        assert!(format!("{}", err).contains("'bounce'"));

        let err = EaseError::UnknownDirectionName("sideways".to_string());
        assert!(format!("{}", err).contains("'sideways'"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = EaseError::UnknownCurve(255);
        let _: &dyn std::error::Error = &err;
    }
}
