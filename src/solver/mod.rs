//! Equilibrium solver and root-finding support.
//!
//! Two cooperating pieces: a scalar [`RootFinder`] capability (default:
//! derivative-free secant iteration with explicit convergence reporting) and
//! the [`EquilibriumSolver`], which builds the zero-expected-profit condition
//! over a fundamental-value distribution and drives the root finder to the
//! equilibrium spread.

/// Zero-expected-profit equilibrium solver.
pub mod equilibrium;

/// Scalar root finding.
pub mod root;

pub use equilibrium::{
    DEFAULT_INITIAL_GUESS, EquilibriumQuote, EquilibriumSolver, solve_exponential, solve_normal,
};
pub use root::{RootFinder, SecantSolver, SolverConfig};
