//! # Copeland-Galai Equilibrium Spread Library
//!
//! A Rust library computing the equilibrium bid and ask prices a market maker
//! quotes when facing a mix of informed and uninformed counterparties, after
//! the Copeland-Galai (1983) adverse-selection model.
//!
//! ## Overview
//!
//! A market maker posts a bid and an ask around the expected fundamental
//! value of the asset. Uninformed traders arrive on both sides and pay the
//! half-spread; with probability π the counterparty instead knows the
//! fundamental value exactly and only trades when the posted quote is stale.
//! The equilibrium spread S* is the one at which the half-spread earned from
//! uninformed flow exactly offsets the expected loss to informed flow, so the
//! market maker's expected profit is zero.
//!
//! ## Key Formulas
//!
//! With center `c` (the distribution mean), ask `a = c + S/2` and bid
//! `b = c - S/2`, the expected profit of a candidate spread `S` is:
//!
//! ```text
//! profit_ask = (1 - π)(a - c) + π(a - E[V | V > a])
//! profit_bid = (1 - π)(c - b) + π(E[V | V < b] - b)
//! profit(S)  = (profit_ask + profit_bid) / 2
//! ```
//!
//! The conditional means are supplied per distribution family:
//!
//! - **Normal(μ, σ)**: `E[V | V > a] = μ + σ·φ(z)/(1 - Φ(z))` with
//!   `z = (a - μ)/σ` — the inverse Mills ratio of the upper-truncated normal.
//! - **Exponential(λ)**: `E[V | V > a] = a + 1/λ` by the memoryless property;
//!   the lower branch uses the left-truncated exponential mean.
//!
//! A derivative-free secant iteration finds the root of `profit(S)` and the
//! quote is reconstructed as `bid = c - S*/2`, `ask = c + S*/2`.
//!
//! ## Modules
//!
//! - [`distribution`]: Conditional-expectation engine per distribution family
//! - [`solver`]: Root finding and the zero-profit equilibrium solver
//! - [`types`]: Errors, Decimal bridges, and domain type aliases
//! - [`prelude`]: Convenient re-exports of commonly used types
//!
//! ## Quick Start
//!
//! ```rust
//! use copeland_galai_rs::prelude::*;
//!
//! // Normal fundamental value: mean 102, std dev 7, 30% informed flow
//! let quote = solve_normal(102.0, 7.0, 0.3).unwrap();
//!
//! assert!(quote.spread > dec!(0));
//! assert!(quote.bid < dec!(102) && dec!(102) < quote.ask);
//! assert_eq!(quote.ask - quote.bid, quote.spread);
//!
//! // Exponential fundamental value: rate 0.0075 (mean ~133.33), 1% informed
//! let quote = solve_exponential(0.0075, 0.01).unwrap();
//! assert!(quote.spread > dec!(0));
//! ```
//!
//! ## Extending to New Distribution Families
//!
//! The solver is written once against the [`distribution::ValueDistribution`]
//! trait. Supporting a new fundamental-value distribution is a matter of
//! implementing its two conditional means and its mean, and handing it to
//! [`solver::EquilibriumSolver::solve`].
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for public types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Re-export Decimal for use throughout the library
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Conditional-expectation engine for fundamental-value distributions.
///
/// Provides:
/// - The [`distribution::ValueDistribution`] trait (conditional means beyond
///   a threshold)
/// - Normal family via the inverse Mills ratio
/// - Exponential family via memoryless-tail identities
pub mod distribution;

/// Prelude module for convenient imports.
pub mod prelude;

/// Equilibrium solver and root-finding support.
///
/// Provides:
/// - The [`solver::RootFinder`] capability and its default secant
///   implementation
/// - [`solver::EquilibriumSolver`] driving the zero-expected-profit condition
/// - [`solver::solve_normal`] / [`solver::solve_exponential`] entry points
pub mod solver;

/// Common types and error definitions.
///
/// Provides:
/// - Error types with thiserror
/// - Guarded f64/Decimal bridge helpers
/// - Primitive type aliases
pub mod types;
