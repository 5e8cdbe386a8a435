//! Newton root-finding on the stationarity conditions of the Lagrangian.
//!
//! # Algorithm
//!
//! A constrained optimum of `f` subject to `g(x) = 0` is a root of
//!
//! ```text
//! F(x, λ) = [ ∂L/∂x(x, λ), g(x) ]
//! ```
//!
//! where `L(x, λ) = f(x) + λ·g(x)`. The first component is obtained by
//! differencing `L` itself, so no analytic derivative of `f` or `g` is needed.
//! Each Newton step solves `J·Δ = -F`, with the Jacobian `J` built column by
//! column from the same differentiator.
//!
//! # Result
//!
//! The solver reports the best point it evaluated, measured by the largest
//! absolute residual. If the iteration budget runs out or the Jacobian becomes
//! singular, that best point is still returned and the [`Status`] says why.
//! Non-finite residuals never replace a finite best point.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted for the initial guess (`iter = 0`) and one after
//! every Newton step. Returning [`Action::StopEarly`] halts the solver.

mod action;
mod best;
mod config;
mod event;
mod newton;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};

use lagrange_core::{Differentiate, EqualityProblem, Lagrangian, Observer};

use best::Best;
use newton::System;

/// Solves the stationarity system of `problem` with Newton's method.
///
/// See the [module docs](self) for the algorithm and observer timing.
pub fn solve<P, D, Obs>(problem: &P, diff: &D, config: &Config, mut observer: Obs) -> Solution
where
    P: EqualityProblem,
    D: Differentiate,
    Obs: Observer<Event, Action>,
{
    let system = System::new(Lagrangian::new(problem), diff);

    let mut point = config.initial();
    let mut residuals = system.residuals(point);
    let mut best = Best::new(point, residuals);

    let event = Event::new(0, point, residuals);
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return best.finish(Status::StoppedByObserver, 0);
    }

    for iter in 1..=config.max_iters() {
        if best.is_converged(config.residual_tol()) {
            return best.finish(Status::Converged, iter - 1);
        }

        let Some(delta) = system.jacobian(point).newton_step(residuals) else {
            return best.finish(Status::SingularJacobian, iter - 1);
        };

        point = [point[0] + delta[0], point[1] + delta[1]];
        residuals = system.residuals(point);
        best.update(point, residuals);

        let event = Event::new(iter, point, residuals);
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return best.finish(Status::StoppedByObserver, iter);
        }
    }

    let status = if best.is_converged(config.residual_tol()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    best.finish(status, config.max_iters())
}

/// Solves the stationarity system without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<P, D>(problem: &P, diff: &D, config: &Config) -> Solution
where
    P: EqualityProblem,
    D: Differentiate,
{
    solve(problem, diff, config, ())
}
