//! Primal-dual gradient iteration on the Lagrangian.
//!
//! # Algorithm
//!
//! Starting from `(x₀, λ₀)`, each iteration first checks the feasibility gap
//! `|g(x)|` against the tolerance. If it is not yet small enough:
//!
//! ```text
//! x ← x + η·(f'(x) + λ·g'(x))    ascent on L in x
//! λ ← λ - η·g(x)                 descent on L in λ, using the new x
//! ```
//!
//! Both derivatives come from the shared differentiator, one term at a time.
//! The ascent direction targets a constrained maximum of `f`.
//!
//! # Termination
//!
//! The feasibility check runs at the top of every iteration, so a run that
//! converges at iteration `k` has taken `k - 1` steps and its history holds
//! `k` points. A run that never passes the check ends as
//! [`Status::Exhausted`], and the step taken in the final iteration is never
//! checked.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted after each step. Returning [`Action::StopEarly`]
//! halts the solver.

mod action;
mod config;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};

use lagrange_core::{Differentiate, EqualityProblem, Lagrangian, Observer};

/// Runs primal-dual gradient iteration on `problem`.
///
/// See the [module docs](self) for the update rule and observer timing.
pub fn solve<P, D, Obs>(problem: &P, diff: &D, config: &Config, mut observer: Obs) -> Solution
where
    P: EqualityProblem,
    D: Differentiate,
    Obs: Observer<Event, Action>,
{
    let lagrangian = Lagrangian::new(problem);
    let rate = config.learning_rate();

    let mut x = config.initial_x();
    let mut lambda = config.initial_lambda();
    let mut history = vec![x];

    for iter in 1..=config.max_iters() {
        if problem.residual(x) < config.residual_tol() {
            return Solution::new(Status::Converged, x, lambda, history, iter);
        }

        x += rate * lagrangian.partial_x_by_terms(diff, x, lambda);
        history.push(x);
        lambda -= rate * problem.constraint(x);

        let event = Event {
            iter,
            x,
            lambda,
            residual: problem.residual(x),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::new(Status::StoppedByObserver, x, lambda, history, iter);
        }
    }

    Solution::new(Status::Exhausted, x, lambda, history, config.max_iters())
}

/// Runs primal-dual gradient iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<P, D>(problem: &P, diff: &D, config: &Config) -> Solution
where
    P: EqualityProblem,
    D: Differentiate,
{
    solve(problem, diff, config, ())
}
