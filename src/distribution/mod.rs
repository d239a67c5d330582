//! Conditional-expectation engine for fundamental-value distributions.
//!
//! The equilibrium solver needs one thing from a distribution family: the
//! conditional mean of the fundamental value beyond a threshold, on either
//! side. Adverse selection at the ask means the counterparty knows `V > ask`;
//! at the bid, `V < bid`. The expected loss per informed trade is the gap
//! between the posted quote and that conditional mean.
//!
//! Implementations are pure functions of their inputs and are total on
//! finite thresholds: where the underlying formulas turn numerically
//! unstable (deep normal tails, the exponential lower branch near zero),
//! they return the saturating analytic limit instead of propagating NaN or
//! infinity into the root finder.

/// Exponential fundamental-value distribution.
pub mod exponential;

/// Normal fundamental-value distribution.
pub mod normal;

pub use exponential::ExponentialValue;
pub use normal::NormalValue;

/// A fundamental-value distribution, as seen by the equilibrium solver.
///
/// The solver is written once against this trait; adding a distribution
/// family is a matter of implementing it.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::distribution::{NormalValue, ValueDistribution};
///
/// let value = NormalValue::new(100.0, 10.0).unwrap();
///
/// // The conditional mean above a threshold always exceeds the threshold.
/// let upper = value.conditional_upper_mean(105.0);
/// assert!(upper > 105.0);
/// ```
pub trait ValueDistribution {
    /// Returns the unconditional mean of the fundamental value.
    ///
    /// Quotes are centered on this value: `ask = mean + S/2`,
    /// `bid = mean - S/2`.
    fn mean(&self) -> f64;

    /// Returns `E[V | V > threshold]`, the expected fundamental value given
    /// that the market maker is adversely selected at the ask.
    fn conditional_upper_mean(&self, threshold: f64) -> f64;

    /// Returns `E[V | V < threshold]`, the expected fundamental value given
    /// that the market maker is adversely selected at the bid.
    fn conditional_lower_mean(&self, threshold: f64) -> f64;
}
