//! Runs the three solvers on the reference problem.
//!
//! # Usage
//!
//! ```text
//! cargo run -p lagrange-cli --features plot -- all
//! cargo run -p lagrange-cli -- ascent --trace --no-plot
//! ```
//!
//! # Modes
//!
//! - **stationary** — Newton iteration on `[∂L/∂x, g] = 0`.
//! - **ascent** — primal-dual gradient iteration; plots the path of x.
//! - **penalty** — quadratic-penalty descent with ρ = 3; plots the path of x.
//! - **all** (default) — each of the above in turn.
//!
//! `--trace` writes every solver event to stderr. Plot windows open only when
//! built with the `plot` feature, and `--no-plot` suppresses them.

mod args;
mod report;

use std::{error::Error, io};

use lagrange_core::{CentralDifference, EqualityProblem, reference};
use lagrange_observers::{Scene, TraceObserver};
use lagrange_solvers::{penalty, primal_dual, stationary};

use args::{Args, Method, USAGE};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse(std::env::args().skip(1)).unwrap_or_else(|error| {
        eprintln!("{error}");
        eprintln!("{USAGE}");
        std::process::exit(1);
    });

    let problem = reference::problem();
    let diff = CentralDifference::default();

    for method in &args.methods {
        let (lines, scene) = run(*method, &problem, &diff, args.trace)?;
        for line in lines {
            println!("{line}");
        }
        if args.plot {
            plot(scene, method.label())?;
        }
    }

    Ok(())
}

/// Runs one solver, returning its summary and the scene to plot.
fn run<P: EqualityProblem>(
    method: Method,
    problem: &P,
    diff: &CentralDifference,
    trace: bool,
) -> Result<(Vec<String>, Scene), Box<dyn Error>> {
    let mut tracer = TraceObserver::new(io::stderr(), method.label());

    let outcome = match method {
        Method::Stationary => {
            let config = stationary::Config::default();
            let solution = if trace {
                stationary::solve(problem, diff, &config, &mut tracer)
            } else {
                stationary::solve_unobserved(problem, diff, &config)
            };
            (
                report::stationary(&solution),
                Scene::new(problem, solution.x, None),
            )
        }
        Method::PrimalDual => {
            let config = primal_dual::Config::default();
            let solution = if trace {
                primal_dual::solve(problem, diff, &config, &mut tracer)
            } else {
                primal_dual::solve_unobserved(problem, diff, &config)
            };
            (
                report::primal_dual(&solution),
                Scene::new(problem, solution.x, Some(solution.history.as_slice())),
            )
        }
        Method::Penalty => {
            let config = penalty::Config::default();
            let solution = if trace {
                penalty::solve(problem, diff, &config, &mut tracer)
            } else {
                penalty::solve_unobserved(problem, diff, &config)
            };
            (
                report::penalty(&solution),
                Scene::new(problem, solution.x, Some(solution.history.as_slice())),
            )
        }
    };

    tracer.finish()?;
    Ok(outcome)
}

#[cfg(feature = "plot")]
fn plot(scene: Scene, title: &str) -> Result<(), Box<dyn Error>> {
    lagrange_observers::plot::show(scene, title)?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot(_scene: Scene, _title: &str) -> Result<(), Box<dyn Error>> {
    Ok(())
}
