//! Safe casting utilities for float-to-pixel conversions

use crate::{Error, Result};

/// Safely convert f64 to i32 with bounds checking
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
pub fn f64_to_i32(value: f64) -> Result<i32> {
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(Error::InvalidInput(format!(
            "Value {value} cannot be safely converted to i32"
        )))
    }
}

/// Clamp and convert f64 to i32 for pixel coordinates
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f64_to_i32_clamp(value: f64, min: i32, max: i32) -> i32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !value.is_finite() {
        return min;
    }

    let clamped = value.clamp(f64::from(min), f64::from(max));
    (clamped as i32).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_f64_to_i32() {
        assert_eq!(f64_to_i32(42.0).unwrap(), 42);
        assert_eq!(f64_to_i32(-42.0).unwrap(), -42);
        assert_eq!(f64_to_i32(0.0).unwrap(), 0);

        assert!(f64_to_i32(f64::INFINITY).is_err());
        assert!(f64_to_i32(f64::NEG_INFINITY).is_err());
        assert!(f64_to_i32(f64::NAN).is_err());
        assert!(f64_to_i32(f64::from(i32::MAX) * 2.0).is_err());
    }

    #[test]
    fn test_f64_to_i32_clamp() {
        assert_eq!(f64_to_i32_clamp(50.0, 0, 100), 50);
        assert_eq!(f64_to_i32_clamp(-10.0, 0, 100), 0);
        assert_eq!(f64_to_i32_clamp(150.0, 0, 100), 100);
        assert_eq!(f64_to_i32_clamp(f64::NAN, 0, 100), 0);
        // Swapped bounds still behave
        assert_eq!(f64_to_i32_clamp(50.0, 100, 0), 50);
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_in_bounds(value in -1e9f64..1e9f64, min in -1000i32..1000, max in -1000i32..1000) {
            let result = f64_to_i32_clamp(value, min, max);
            let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
            prop_assert!(result >= lo && result <= hi);
        }
    }
}
