use std::fmt;

use lagrange_core::EqualityProblem;

/// Indicates how the penalty solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The feasibility gap fell below the tolerance.
    Converged,

    /// Ran every iteration without passing the feasibility check.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a penalty run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Final x.
    pub x: f64,

    /// The shifted constraint `g(x)` at the final x.
    pub constraint: f64,

    /// The constraint surface `g0(x)` at the final x.
    pub surface: f64,

    /// Every x visited, starting with the initial guess.
    pub history: Vec<f64>,

    /// Iteration at which the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new<P: EqualityProblem>(
        problem: &P,
        status: Status,
        x: f64,
        history: Vec<f64>,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x,
            constraint: problem.constraint(x),
            surface: problem.surface(x),
            history,
            iters,
        }
    }

    /// Returns the feasibility gap `|g(x)|` at the final x.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.constraint.abs()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:.5}, g(x)={:.5}, g0(x)={:.5}",
            self.x, self.constraint, self.surface
        )
    }
}
