//! Exponentially-distributed fundamental value.
//!
//! The exponential family has closed-form tail identities. By the memoryless
//! property the overshoot beyond any threshold is again Exponential(λ), so:
//!
//! ```text
//! E[V | V > a] = a + 1/λ
//! ```
//!
//! The lower branch is the mean of an exponential truncated above at b:
//!
//! ```text
//! E[V | V < b] = [1 - e^{-λb}(1 + λb)] / [λ(1 - e^{-λb})]
//! ```
//!
//! As b → 0⁺ both numerator and denominator vanish; the limit is b/2, which
//! is substituted once λb falls below a clamp threshold.

use crate::distribution::ValueDistribution;
use crate::types::error::{CGError, CGResult};

/// Below this value of λ·b the truncated-mean ratio is replaced by its
/// b → 0⁺ limit of b/2.
const TRUNCATION_CLAMP: f64 = 1e-8;

/// Exponentially-distributed fundamental value with rate λ (mean 1/λ).
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::distribution::{ExponentialValue, ValueDistribution};
///
/// let value = ExponentialValue::new(0.0075).unwrap();
/// assert!((value.mean() - 133.333).abs() < 0.001);
///
/// // The memoryless property: overshoot beyond any threshold is 1/λ.
/// let upper = value.conditional_upper_mean(200.0);
/// assert!((upper - (200.0 + value.mean())).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialValue {
    rate: f64,
}

impl ExponentialValue {
    /// Creates an exponential fundamental-value distribution.
    ///
    /// # Arguments
    ///
    /// * `rate` - Rate parameter λ (must be positive and finite)
    ///
    /// # Errors
    ///
    /// Returns [`CGError::InvalidParameter`] if `rate` is not finite and
    /// positive.
    pub fn new(rate: f64) -> CGResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(CGError::InvalidParameter(format!(
                "rate must be positive and finite, got {rate}"
            )));
        }

        Ok(Self { rate })
    }

    /// Returns the rate parameter λ.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ValueDistribution for ExponentialValue {
    fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    fn conditional_upper_mean(&self, threshold: f64) -> f64 {
        // Memoryless overshoot. Below the support the condition is vacuous
        // and the conditional mean is the unconditional one.
        threshold.max(0.0) + 1.0 / self.rate
    }

    fn conditional_lower_mean(&self, threshold: f64) -> f64 {
        let scaled = self.rate * threshold;
        if scaled < TRUNCATION_CLAMP {
            // b → 0⁺ limit of the truncated mean; also covers thresholds at
            // or below the support boundary visited transiently by the root
            // finder.
            return threshold / 2.0;
        }

        let decay = (-scaled).exp();
        (1.0 - decay * (1.0 + scaled)) / (self.rate * (1.0 - decay))
    }
}
