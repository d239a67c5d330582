//! Scalar root finding for the equilibrium condition.
//!
//! The equilibrium solver does not own a numeric method; it is written
//! against the [`RootFinder`] capability so the profit-function logic can be
//! tested independently of how the root is located. The default
//! implementation is a derivative-free secant iteration, which matches the
//! smooth, monotone profit functions this library produces.
//!
//! Unlike a raw iterate-and-return loop, [`SecantSolver`] reports its
//! outcomes distinctly: a converged root, a
//! [`ConvergenceFailure`](crate::types::error::CGError::ConvergenceFailure)
//! when the iteration budget runs out or the function goes flat, and a
//! [`NumericalError`](crate::types::error::CGError::NumericalError) when an
//! evaluation turns non-finite. A stale iterate is never passed off as a
//! root.

use tracing::{debug, trace, warn};

use crate::types::error::{CGError, CGResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative offset used to seed the second secant point.
const SEED_OFFSET: f64 = 1e-4;

/// Configuration for the secant root finder.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::solver::SolverConfig;
///
/// let config = SolverConfig {
///     max_iterations: 50,
///     tolerance: 1e-8,
///     ..SolverConfig::default()
/// };
/// assert_eq!(config.max_iterations, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Maximum number of secant iterations before giving up.
    pub max_iterations: usize,

    /// Absolute residual tolerance: a point x is a root once |f(x)| falls
    /// below this value and the iteration has stopped moving.
    pub tolerance: f64,

    /// Relative step tolerance: the iteration has stopped moving once the
    /// last step is below `step_tolerance * (1 + |x|)`.
    pub step_tolerance: f64,

    /// Floor on the secant denominator |f(x1) - f(x0)|. Below it the
    /// function is treated as flat and the search reported as failed.
    pub min_denominator: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
            step_tolerance: 1e-8,
            min_denominator: 1e-15,
        }
    }
}

impl SolverConfig {
    /// Creates a config for quick, looser-tolerance solving.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            max_iterations: 40,
            tolerance: 1e-6,
            ..Self::default()
        }
    }

    /// Creates a config for high-precision solving.
    #[must_use]
    pub fn precise() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-12,
            ..Self::default()
        }
    }
}

/// A scalar root-finding capability.
///
/// Implementors locate an `x` with `f(x) = 0` starting from an initial
/// guess, and must distinguish convergence from giving up.
pub trait RootFinder {
    /// Finds a root of `f` near `initial_guess`.
    ///
    /// # Errors
    ///
    /// - [`CGError::InvalidParameter`] if the guess is not finite
    /// - [`CGError::NumericalError`] if an evaluation is non-finite
    /// - [`CGError::ConvergenceFailure`] if no root is found within the
    ///   method's own termination criteria
    fn find_root<F>(&self, f: F, initial_guess: f64) -> CGResult<f64>
    where
        F: Fn(f64) -> f64;
}

/// Derivative-free secant root finder.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::solver::{RootFinder, SecantSolver};
///
/// let solver = SecantSolver::default();
///
/// // x² - 4 has a root at 2
/// let root = solver.find_root(|x| x * x - 4.0, 3.0).unwrap();
/// assert!((root - 2.0).abs() < 1e-8);
///
/// // A function with no root is reported, not papered over
/// let err = solver.find_root(|x| (-x).exp(), 1.0).unwrap_err();
/// assert!(err.is_convergence_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecantSolver {
    config: SolverConfig,
}

impl SecantSolver {
    /// Creates a secant solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn evaluate<F>(f: &F, x: f64) -> CGResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        let value = f(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CGError::NumericalError(format!(
                "function evaluated to non-finite value {value} at x = {x}"
            )))
        }
    }
}

impl RootFinder for SecantSolver {
    fn find_root<F>(&self, f: F, initial_guess: f64) -> CGResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        if !initial_guess.is_finite() {
            return Err(CGError::InvalidParameter(format!(
                "initial guess must be finite, got {initial_guess}"
            )));
        }

        let mut x_prev = initial_guess;
        let mut f_prev = Self::evaluate(&f, x_prev)?;
        if f_prev.abs() <= self.config.tolerance {
            debug!(root = x_prev, "initial guess already a root");
            return Ok(x_prev);
        }

        let mut x_curr = x_prev + SEED_OFFSET * x_prev.abs().max(1.0);
        let mut f_curr = Self::evaluate(&f, x_curr)?;

        for iteration in 1..=self.config.max_iterations {
            let denominator = f_curr - f_prev;
            if denominator.abs() < self.config.min_denominator {
                warn!(
                    iteration,
                    x = x_curr,
                    residual = f_curr,
                    "secant denominator vanished"
                );
                return Err(CGError::ConvergenceFailure(format!(
                    "function is flat near x = {x_curr} (iteration {iteration})"
                )));
            }

            let x_next = x_curr - f_curr * (x_curr - x_prev) / denominator;
            if !x_next.is_finite() {
                return Err(CGError::NumericalError(format!(
                    "secant step produced non-finite iterate after {iteration} iterations"
                )));
            }

            let f_next = Self::evaluate(&f, x_next)?;
            let step = (x_next - x_curr).abs();
            trace!(iteration, x = x_next, residual = f_next, step, "secant step");

            if f_next.abs() <= self.config.tolerance
                && step <= self.config.step_tolerance * (1.0 + x_next.abs())
            {
                debug!(root = x_next, iteration, "secant converged");
                return Ok(x_next);
            }

            x_prev = x_curr;
            f_prev = f_curr;
            x_curr = x_next;
            f_curr = f_next;
        }

        warn!(
            x = x_curr,
            residual = f_curr,
            "secant exhausted iteration budget"
        );
        Err(CGError::ConvergenceFailure(format!(
            "no root within tolerance after {} iterations (last x = {x_curr})",
            self.config.max_iterations
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SolverConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert!(config.tolerance > 0.0);
    }

    #[test]
    fn test_config_quick_and_precise() {
        assert!(SolverConfig::quick().tolerance > SolverConfig::default().tolerance);
        assert!(SolverConfig::precise().tolerance < SolverConfig::default().tolerance);
    }

    #[test]
    fn test_finds_linear_root() {
        let solver = SecantSolver::default();
        let root = solver.find_root(|x| 2.0 * x - 5.0, 0.0).unwrap();
        assert!((root - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_finds_quadratic_root() {
        let solver = SecantSolver::default();
        let root = solver.find_root(|x| x * x - 4.0, 3.0).unwrap();
        assert!((root - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_finds_transcendental_root() {
        let solver = SecantSolver::default();
        let root = solver.find_root(|x| x.exp() - 2.0, 1.0).unwrap();
        assert!((root - std::f64::consts::LN_2).abs() < 1e-8);
    }

    #[test]
    fn test_guess_already_root() {
        let solver = SecantSolver::default();
        let root = solver.find_root(|x| x, 0.0).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_flat_function_fails_distinctly() {
        let solver = SecantSolver::default();
        let err = solver.find_root(|_| 1.0, 0.0).unwrap_err();
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn test_rootless_function_reports_failure() {
        // e^{-x} approaches zero but never crosses it; the residual shrinks
        // while the iterates keep creeping, so the search must end in a
        // convergence failure rather than a stale iterate.
        let solver = SecantSolver::default();
        let err = solver.find_root(|x| (-x).exp(), 1.0).unwrap_err();
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn test_non_finite_evaluation_fails() {
        let solver = SecantSolver::default();
        let err = solver.find_root(|x| (x - 10.0).ln(), 1.0).unwrap_err();
        assert!(err.is_numerical_error());
    }

    #[test]
    fn test_non_finite_guess_rejected() {
        let solver = SecantSolver::default();
        assert!(solver
            .find_root(|x| x, f64::NAN)
            .unwrap_err()
            .is_parameter_error());
    }
}
