//! Primitive type aliases for domain concepts.
//!
//! Quoted prices are [`Decimal`] so the invariants of a published quote
//! (`ask - bid == spread`, symmetry around the center) hold exactly. Model
//! parameters stay `f64`: they feed transcendental math and the root finder,
//! which operate in floating point.

use crate::Decimal;

/// A quoted price (bid or ask).
pub type Price = Decimal;

/// A bid-ask spread.
pub type Spread = Decimal;

/// Probability that a counterparty is informed, in [0, 1].
pub type Probability = f64;

/// Rate parameter of an exponential distribution (mean = 1/rate).
pub type Rate = f64;
