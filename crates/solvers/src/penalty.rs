//! Quadratic-penalty gradient descent.
//!
//! # Algorithm
//!
//! The constraint is folded into the objective with a fixed weight `ρ`:
//!
//! ```text
//! φ(x) = f(x) + ρ·g(x)²/2
//! x ← x - η·(f'(x) + ρ·g(x)·g'(x))
//! ```
//!
//! and the unconstrained `φ` is descended from `x₀`. After every step the
//! feasibility gap `|g(x)|` is compared with the tolerance.
//!
//! # Limitations
//!
//! - **Fixed penalty**: `ρ` never grows, so the exact minimizer of `φ` sits
//!   at a distance from the feasible set that shrinks like `1/ρ`. The
//!   feasibility check can still pass on the way there.
//! - **Stiffness**: large `ρ·η` overshoots and can diverge. The solver does
//!   not detect this; the run ends as [`Status::Exhausted`] with whatever
//!   (possibly non-finite) x it reached.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted after each step. Returning [`Action::StopEarly`]
//! halts the solver unless that same step already converged.

mod action;
mod config;
mod event;
mod objective;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use objective::Penalized;
pub use solution::{Solution, Status};

use lagrange_core::{Differentiate, EqualityProblem, Observer};

/// Runs quadratic-penalty descent on `problem`.
///
/// See the [module docs](self) for the update rule and observer timing.
pub fn solve<P, D, Obs>(problem: &P, diff: &D, config: &Config, mut observer: Obs) -> Solution
where
    P: EqualityProblem,
    D: Differentiate,
    Obs: Observer<Event, Action>,
{
    let penalized = Penalized::new(problem, config.penalty());
    let rate = config.learning_rate();

    let mut x = config.initial_x();
    let mut history = vec![x];

    for iter in 1..=config.max_iters() {
        x -= rate * penalized.gradient(diff, x);
        history.push(x);

        let residual = problem.residual(x);
        let action = observer.observe(&Event { iter, x, residual });

        if residual < config.residual_tol() {
            return Solution::new(problem, Status::Converged, x, history, iter);
        }
        if let Some(Action::StopEarly) = action {
            return Solution::new(problem, Status::StoppedByObserver, x, history, iter);
        }
    }

    Solution::new(problem, Status::Exhausted, x, history, config.max_iters())
}

/// Runs quadratic-penalty descent without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<P, D>(problem: &P, diff: &D, config: &Config) -> Solution
where
    P: EqualityProblem,
    D: Differentiate,
{
    solve(problem, diff, config, ())
}
