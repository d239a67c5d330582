//! Normally-distributed fundamental value.
//!
//! Conditional means of a truncated normal follow the inverse Mills ratio:
//!
//! ```text
//! E[V | V > a] = μ + σ·φ(z_a) / (1 - Φ(z_a))    z_a = (a - μ)/σ
//! E[V | V < b] = μ - σ·φ(z_b) / Φ(z_b)          z_b = (b - μ)/σ
//! ```
//!
//! Deep in either tail the denominator underflows toward zero and the ratio
//! blows up numerically, so both branches switch to the first-order Mills
//! asymptote `threshold ± σ/z` — the analytic behavior of the truncated mean
//! as the tail mass vanishes.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::distribution::ValueDistribution;
use crate::types::error::{CGError, CGResult};

/// Floor below which a tail probability is treated as vanished.
const TAIL_MASS_FLOOR: f64 = 1e-300;

/// Normally-distributed fundamental value with mean μ and standard
/// deviation σ.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::distribution::{NormalValue, ValueDistribution};
///
/// let value = NormalValue::new(102.0, 7.0).unwrap();
/// assert_eq!(value.mean(), 102.0);
///
/// // σ must be positive
/// assert!(NormalValue::new(102.0, 0.0).is_err());
/// assert!(NormalValue::new(102.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NormalValue {
    mean: f64,
    std_dev: f64,
    dist: Normal,
}

impl NormalValue {
    /// Creates a normal fundamental-value distribution.
    ///
    /// # Arguments
    ///
    /// * `mean` - Mean μ of the fundamental value
    /// * `std_dev` - Standard deviation σ (must be positive and finite)
    ///
    /// # Errors
    ///
    /// Returns [`CGError::InvalidParameter`] if `mean` is not finite or
    /// `std_dev` is not finite and positive.
    pub fn new(mean: f64, std_dev: f64) -> CGResult<Self> {
        if !mean.is_finite() {
            return Err(CGError::InvalidParameter(format!(
                "mean must be finite, got {mean}"
            )));
        }

        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(CGError::InvalidParameter(format!(
                "std_dev must be positive and finite, got {std_dev}"
            )));
        }

        let dist = Normal::new(mean, std_dev).map_err(|e| {
            CGError::InvalidParameter(format!("invalid normal parameters: {e}"))
        })?;

        Ok(Self {
            mean,
            std_dev,
            dist,
        })
    }

    /// Returns the standard deviation σ.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl ValueDistribution for NormalValue {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn conditional_upper_mean(&self, threshold: f64) -> f64 {
        // σ·φ(z) = σ²·f(threshold) with f the density of N(μ, σ²), so the
        // Mills ratio can be taken on the distribution itself.
        let survival = 1.0 - self.dist.cdf(threshold);
        if survival < TAIL_MASS_FLOOR {
            // First-order Mills asymptote: the overshoot decays like σ/z,
            // which keeps the ratio finite and the profit function monotone
            // once the tail mass is no longer representable.
            let z = (threshold - self.mean) / self.std_dev;
            return threshold + self.std_dev / z;
        }
        self.mean + self.std_dev * self.std_dev * self.dist.pdf(threshold) / survival
    }

    fn conditional_lower_mean(&self, threshold: f64) -> f64 {
        let mass = self.dist.cdf(threshold);
        if mass < TAIL_MASS_FLOOR {
            let z = (self.mean - threshold) / self.std_dev;
            return threshold - self.std_dev / z;
        }
        self.mean - self.std_dev * self.std_dev * self.dist.pdf(threshold) / mass
    }
}
