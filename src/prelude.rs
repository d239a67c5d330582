//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the equilibrium spread library. Users can import everything they need
//! with:
//!
//! ```rust
//! use copeland_galai_rs::prelude::*;
//! ```

// Re-export Decimal and the literal macro
pub use crate::{Decimal, dec};

// Re-export types module
pub use crate::types::decimal::{decimal_from_f64, decimal_to_f64};
pub use crate::types::error::{CGError, CGResult};
pub use crate::types::primitives::{Price, Probability, Rate, Spread};

// Re-export distribution types
pub use crate::distribution::{ExponentialValue, NormalValue, ValueDistribution};

// Re-export solver types
pub use crate::solver::{
    DEFAULT_INITIAL_GUESS, EquilibriumQuote, EquilibriumSolver, RootFinder, SecantSolver,
    SolverConfig, solve_exponential, solve_normal,
};
