//! Guarded conversions between `f64` and [`Decimal`].
//!
//! The solver works in `f64`; published quotes are [`Decimal`]. These helpers
//! sit at that boundary and refuse to let a NaN or infinity cross it, so a
//! non-finite solver result can never be formatted as a price.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::Decimal;
use crate::types::error::{CGError, CGResult};

/// Converts an `f64` into a [`Decimal`].
///
/// # Errors
///
/// Returns [`CGError::NumericalError`] if `value` is NaN, infinite, or
/// outside the representable Decimal range.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::types::decimal::decimal_from_f64;
/// use copeland_galai_rs::dec;
///
/// let d = decimal_from_f64(1.5).unwrap();
/// assert_eq!(d, dec!(1.5));
///
/// assert!(decimal_from_f64(f64::NAN).is_err());
/// assert!(decimal_from_f64(f64::INFINITY).is_err());
/// ```
pub fn decimal_from_f64(value: f64) -> CGResult<Decimal> {
    if !value.is_finite() {
        return Err(CGError::NumericalError(format!(
            "cannot represent non-finite value {value} as Decimal"
        )));
    }

    Decimal::from_f64(value).ok_or_else(|| {
        CGError::NumericalError(format!("value {value} out of Decimal range"))
    })
}

/// Converts a [`Decimal`] into an `f64`.
///
/// # Errors
///
/// Returns [`CGError::NumericalError`] if the conversion fails or produces a
/// non-finite value.
pub fn decimal_to_f64(value: Decimal) -> CGResult<f64> {
    match value.to_f64() {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(CGError::NumericalError(format!(
            "cannot represent {value} as a finite f64"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_decimal_from_f64_roundtrip() {
        assert_eq!(decimal_from_f64(0.0).unwrap(), Decimal::ZERO);
        assert_eq!(decimal_from_f64(-2.5).unwrap(), dec!(-2.5));
        assert_eq!(decimal_from_f64(102.0).unwrap(), dec!(102));
    }

    #[test]
    fn test_decimal_from_f64_rejects_non_finite() {
        assert!(decimal_from_f64(f64::NAN).unwrap_err().is_numerical_error());
        assert!(decimal_from_f64(f64::INFINITY).is_err());
        assert!(decimal_from_f64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_decimal_to_f64() {
        let f = decimal_to_f64(dec!(133.25)).unwrap();
        assert!((f - 133.25).abs() < 1e-12);
    }
}
