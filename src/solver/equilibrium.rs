//! Zero-expected-profit equilibrium solver.
//!
//! For a candidate spread S around the distribution mean c, the market maker
//! earns the half-spread from uninformed flow on each side and loses the gap
//! between quote and conditional value when picked off by an informed
//! counterparty (probability π):
//!
//! ```text
//! profit_ask = (1 - π)(a - c) + π(a - E[V | V > a])      a = c + S/2
//! profit_bid = (1 - π)(c - b) + π(E[V | V < b] - b)      b = c - S/2
//! profit(S)  = (profit_ask + profit_bid) / 2
//! ```
//!
//! The equilibrium spread S* is the root of `profit`, and the quote is
//! reconstructed symmetrically: `bid = c - S*/2`, `ask = c + S*/2`.

use tracing::debug;

use crate::Decimal;
use crate::distribution::{ExponentialValue, NormalValue, ValueDistribution};
use crate::solver::root::{RootFinder, SecantSolver};
use crate::types::decimal::decimal_from_f64;
use crate::types::error::{CGError, CGResult};
use crate::types::primitives::{Price, Probability, Rate, Spread};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default initial guess for the equilibrium spread.
pub const DEFAULT_INITIAL_GUESS: f64 = 1.0;

/// A solved root within this distance of zero, on either side, is treated as
/// the degenerate zero-spread equilibrium.
const ZERO_SPREAD_TOLERANCE: f64 = 1e-8;

/// An equilibrium bid/ask quote.
///
/// Constructed so that `ask - bid == spread` and `(bid + ask) / 2` equals the
/// distribution mean exactly in Decimal arithmetic.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::prelude::*;
///
/// let quote = solve_normal(102.0, 7.0, 0.3).unwrap();
///
/// assert_eq!(quote.ask - quote.bid, quote.spread);
/// assert_eq!(quote.mid(), dec!(102));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquilibriumQuote {
    /// Price at which the market maker buys.
    pub bid: Price,

    /// Price at which the market maker sells.
    pub ask: Price,

    /// Equilibrium spread, `ask - bid`.
    pub spread: Spread,
}

impl EquilibriumQuote {
    /// Builds a quote symmetric around `center` with the given spread.
    ///
    /// The half-spread is converted once and applied to both sides, so the
    /// Decimal invariants hold exactly rather than within float tolerance.
    fn from_center_and_spread(center: f64, spread: f64) -> CGResult<Self> {
        let center = decimal_from_f64(center)?;
        let half = decimal_from_f64(spread / 2.0)?;

        Ok(Self {
            bid: center - half,
            ask: center + half,
            spread: half + half,
        })
    }

    /// Returns the midpoint of the quote.
    #[must_use]
    pub fn mid(&self) -> Price {
        (self.bid + self.ask) / Decimal::TWO
    }

    /// Returns half the spread.
    #[must_use]
    pub fn half_spread(&self) -> Spread {
        self.spread / Decimal::TWO
    }

    /// Consumes the quote and returns `(bid, ask, spread)`.
    #[must_use]
    pub fn into_parts(self) -> (Price, Price, Spread) {
        (self.bid, self.ask, self.spread)
    }
}

/// Solves for the spread at which expected market-making profit is zero.
///
/// The solver is generic over the [`RootFinder`] capability; the default is
/// a [`SecantSolver`] with standard tolerances.
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::distribution::NormalValue;
/// use copeland_galai_rs::solver::EquilibriumSolver;
///
/// let value = NormalValue::new(102.0, 7.0).unwrap();
/// let quote = EquilibriumSolver::new().solve(&value, 0.3, 1.0).unwrap();
///
/// assert!(quote.bid < quote.ask);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EquilibriumSolver<R = SecantSolver> {
    root_finder: R,
}

impl EquilibriumSolver<SecantSolver> {
    /// Creates a solver with the default secant root finder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: RootFinder> EquilibriumSolver<R> {
    /// Creates a solver around a custom root-finding capability.
    #[must_use]
    pub fn with_root_finder(root_finder: R) -> Self {
        Self { root_finder }
    }

    /// Expected market-maker profit for a candidate spread.
    ///
    /// Exposed so the equilibrium condition can be probed independently of
    /// any root finder: the solved spread is the value where this function
    /// crosses zero.
    pub fn expected_profit<D>(value: &D, informed_probability: Probability, spread: f64) -> f64
    where
        D: ValueDistribution,
    {
        let center = value.mean();
        let ask = center + spread / 2.0;
        let bid = center - spread / 2.0;

        let pi = informed_probability;
        let profit_ask =
            (1.0 - pi) * (ask - center) + pi * (ask - value.conditional_upper_mean(ask));
        let profit_bid =
            (1.0 - pi) * (center - bid) + pi * (value.conditional_lower_mean(bid) - bid);

        0.5 * (profit_ask + profit_bid)
    }

    /// Solves for the equilibrium quote.
    ///
    /// # Arguments
    ///
    /// * `value` - Fundamental-value distribution
    /// * `informed_probability` - Probability π the counterparty is informed,
    ///   in [0, 1]
    /// * `initial_guess` - Starting spread for the root finder
    ///
    /// # Errors
    ///
    /// - [`CGError::InvalidParameter`] if π is outside [0, 1] or not finite,
    ///   or the guess is not finite
    /// - [`CGError::ConvergenceFailure`] if the root finder gives up — the
    ///   typical outcome when no equilibrium exists (e.g. π close to 1)
    /// - [`CGError::NumericalError`] if a profit evaluation or the final
    ///   Decimal conversion is non-finite
    /// - [`CGError::InvalidQuote`] if the root finder converges to a
    ///   materially negative spread
    pub fn solve<D>(
        &self,
        value: &D,
        informed_probability: Probability,
        initial_guess: f64,
    ) -> CGResult<EquilibriumQuote>
    where
        D: ValueDistribution,
    {
        if !informed_probability.is_finite()
            || !(0.0..=1.0).contains(&informed_probability)
        {
            return Err(CGError::InvalidParameter(format!(
                "informed probability must be within [0, 1], got {informed_probability}"
            )));
        }

        let profit = |spread: f64| Self::expected_profit(value, informed_probability, spread);
        let root = self.root_finder.find_root(profit, initial_guess)?;

        let spread = if root.abs() <= ZERO_SPREAD_TOLERANCE {
            0.0
        } else if root < 0.0 {
            return Err(CGError::InvalidQuote(format!(
                "solved spread {root} is negative; no admissible equilibrium"
            )));
        } else {
            root
        };

        debug!(spread, informed_probability, "equilibrium spread located");
        EquilibriumQuote::from_center_and_spread(value.mean(), spread)
    }
}

/// Solves the equilibrium quote for a normally-distributed fundamental
/// value, starting from the default initial guess.
///
/// # Arguments
///
/// * `mean` - Mean μ of the fundamental value
/// * `std_dev` - Standard deviation σ (must be positive)
/// * `informed_probability` - Probability π the counterparty is informed
///
/// # Errors
///
/// See [`NormalValue::new`] and [`EquilibriumSolver::solve`].
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::prelude::*;
///
/// let quote = solve_normal(102.0, 7.0, 0.3).unwrap();
/// assert!(quote.bid < dec!(102) && dec!(102) < quote.ask);
/// ```
pub fn solve_normal(
    mean: f64,
    std_dev: f64,
    informed_probability: Probability,
) -> CGResult<EquilibriumQuote> {
    let value = NormalValue::new(mean, std_dev)?;
    EquilibriumSolver::new().solve(&value, informed_probability, DEFAULT_INITIAL_GUESS)
}

/// Solves the equilibrium quote for an exponentially-distributed fundamental
/// value, starting from the default initial guess.
///
/// # Arguments
///
/// * `rate` - Rate parameter λ (must be positive); the quote centers on the
///   mean 1/λ
/// * `informed_probability` - Probability π the counterparty is informed
///
/// # Errors
///
/// See [`ExponentialValue::new`] and [`EquilibriumSolver::solve`].
///
/// # Example
///
/// ```rust
/// use copeland_galai_rs::prelude::*;
///
/// let quote = solve_exponential(0.0075, 0.01).unwrap();
/// assert!(quote.spread > dec!(0));
/// ```
pub fn solve_exponential(
    rate: Rate,
    informed_probability: Probability,
) -> CGResult<EquilibriumQuote> {
    let value = ExponentialValue::new(rate)?;
    EquilibriumSolver::new().solve(&value, informed_probability, DEFAULT_INITIAL_GUESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;
    use crate::types::decimal::decimal_to_f64;

    #[test]
    fn test_normal_reference_scenario() {
        // Normal(μ=102, σ=7), 30% informed flow.
        let quote = solve_normal(102.0, 7.0, 0.3).unwrap();

        assert!(quote.spread > dec!(3.5) && quote.spread < dec!(5.0));
        assert!(quote.bid < dec!(102));
        assert!(quote.ask > dec!(102));
    }

    #[test]
    fn test_normal_profit_is_zero_at_solution() {
        let quote = solve_normal(102.0, 7.0, 0.3).unwrap();
        let value = NormalValue::new(102.0, 7.0).unwrap();

        let spread = decimal_to_f64(quote.spread).unwrap();
        let profit = EquilibriumSolver::<SecantSolver>::expected_profit(&value, 0.3, spread);
        assert!(profit.abs() < 1e-8);
    }

    #[test]
    fn test_exponential_reference_scenario() {
        // Exponential(λ=0.0075), 1% informed flow: spread stays small and
        // straddles the mean 1/λ ≈ 133.33.
        let quote = solve_exponential(0.0075, 0.01).unwrap();

        assert!(quote.spread > dec!(0) && quote.spread < dec!(5));
        assert!(quote.bid < dec!(133.33));
        assert!(quote.ask > dec!(133.34));
    }

    #[test]
    fn test_quote_invariants_exact() {
        let quote = solve_normal(102.0, 7.0, 0.3).unwrap();
        assert_eq!(quote.ask - quote.bid, quote.spread);
        assert_eq!(quote.mid(), dec!(102));

        let quote = solve_exponential(0.0075, 0.01).unwrap();
        assert_eq!(quote.ask - quote.bid, quote.spread);
        assert_eq!(quote.mid(), decimal_from_f64(1.0 / 0.0075).unwrap());
    }

    #[test]
    fn test_spread_monotone_in_informed_probability() {
        let mut previous = Decimal::ZERO;

        for pi in [0.05, 0.1, 0.2, 0.3, 0.4] {
            let quote = solve_normal(102.0, 7.0, pi).unwrap();
            assert!(
                quote.spread >= previous,
                "spread shrank when pi rose to {pi}"
            );
            previous = quote.spread;
        }
    }

    #[test]
    fn test_spread_vanishes_as_informed_flow_vanishes() {
        let quote = solve_normal(102.0, 7.0, 1e-6).unwrap();
        assert!(quote.spread >= dec!(0));
        assert!(quote.spread < dec!(0.001));

        let quote = solve_exponential(0.0075, 1e-6).unwrap();
        assert!(quote.spread >= dec!(0));
        assert!(quote.spread < dec!(0.01));
    }

    #[test]
    fn test_degenerate_zero_informed_probability() {
        // With no informed flow a zero spread is the zero-profit equilibrium.
        let quote = solve_normal(102.0, 7.0, 0.0).unwrap();
        assert_eq!(quote.spread, Decimal::ZERO);
        assert_eq!(quote.bid, dec!(102));
        assert_eq!(quote.ask, dec!(102));

        let quote = solve_exponential(0.0075, 0.0).unwrap();
        assert_eq!(quote.spread, Decimal::ZERO);
    }

    #[test]
    fn test_all_informed_has_no_normal_equilibrium() {
        // With π = 1 the half-spread income is gone and the normal profit
        // function stays negative; the solver must say so rather than hand
        // back a stale iterate.
        let err = solve_normal(102.0, 7.0, 1.0).unwrap_err();
        assert!(err.is_convergence_failure() || err.is_numerical_error());
    }

    #[test]
    fn test_invalid_parameters_rejected_before_solving() {
        assert!(solve_normal(102.0, 0.0, 0.3).unwrap_err().is_parameter_error());
        assert!(solve_normal(102.0, -7.0, 0.3).is_err());
        assert!(solve_exponential(0.0, 0.01).unwrap_err().is_parameter_error());
        assert!(solve_exponential(-0.5, 0.01).is_err());

        assert!(solve_normal(102.0, 7.0, -0.1).unwrap_err().is_parameter_error());
        assert!(solve_normal(102.0, 7.0, 1.5).is_err());
        assert!(solve_normal(102.0, 7.0, f64::NAN).is_err());
        assert!(solve_exponential(0.0075, 2.0).is_err());
    }

    #[test]
    fn test_solver_respects_initial_guess() {
        let value = NormalValue::new(102.0, 7.0).unwrap();
        let solver = EquilibriumSolver::new();

        let from_small = solver.solve(&value, 0.3, 0.5).unwrap();
        let from_large = solver.solve(&value, 0.3, 20.0).unwrap();

        let difference = (from_small.spread - from_large.spread).abs();
        assert!(difference < dec!(0.000001));
    }

    #[test]
    fn test_non_finite_guess_rejected() {
        let value = NormalValue::new(102.0, 7.0).unwrap();
        let solver = EquilibriumSolver::new();
        assert!(solver.solve(&value, 0.3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_expected_profit_sign_change_brackets_root() {
        let value = NormalValue::new(102.0, 7.0).unwrap();

        let low = EquilibriumSolver::<SecantSolver>::expected_profit(&value, 0.3, 1.0);
        let high = EquilibriumSolver::<SecantSolver>::expected_profit(&value, 0.3, 10.0);
        assert!(low < 0.0);
        assert!(high > 0.0);
    }

    #[test]
    fn test_quote_accessors() {
        let quote = solve_normal(100.0, 5.0, 0.2).unwrap();

        assert_eq!(quote.half_spread() + quote.half_spread(), quote.spread);

        let (bid, ask, spread) = quote.into_parts();
        assert_eq!(ask - bid, spread);
    }
}
