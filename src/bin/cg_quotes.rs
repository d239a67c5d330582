//! Prints equilibrium Copeland-Galai quotes for the two worked examples:
//! a Normal fundamental value (μ=102, σ=7, π=0.3) and an Exponential one
//! (λ=0.0075, π=0.01). Parameters can be overridden on the command line.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use copeland_galai_rs::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "cg-quotes")]
#[command(about = "Equilibrium bid/ask quotes under the Copeland-Galai adverse-selection model")]
struct Args {
    /// Mean of the normal fundamental value
    #[arg(long, default_value_t = 102.0)]
    mean: f64,

    /// Standard deviation of the normal fundamental value
    #[arg(long, default_value_t = 7.0)]
    std_dev: f64,

    /// Informed-trading probability for the normal example
    #[arg(long, default_value_t = 0.3)]
    normal_pi: f64,

    /// Rate parameter of the exponential fundamental value
    #[arg(long, default_value_t = 0.0075)]
    rate: f64,

    /// Informed-trading probability for the exponential example
    #[arg(long, default_value_t = 0.01)]
    exponential_pi: f64,
}

/// Prints a section header and the quote, or the error when no quote exists.
/// Returns whether a quote was printed.
fn report(header: &str, result: CGResult<EquilibriumQuote>) -> bool {
    println!("{header}");
    match result {
        Ok(quote) => {
            println!(
                "Bid: {:.4}, Ask: {:.4}, Spread: {:.4}",
                quote.bid, quote.ask, quote.spread
            );
            true
        }
        Err(err) => {
            eprintln!("no quote: {err}");
            false
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let normal_ok = report(
        "------- Normal Distribution -------",
        solve_normal(args.mean, args.std_dev, args.normal_pi),
    );
    println!();
    let exponential_ok = report(
        "----- Exponential Distribution -----",
        solve_exponential(args.rate, args.exponential_pi),
    );

    if !(normal_ok && exponential_ok) {
        std::process::exit(1);
    }
}
