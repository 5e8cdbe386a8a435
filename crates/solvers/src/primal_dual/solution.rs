use std::fmt;

/// Indicates how the primal-dual solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The feasibility gap fell below the tolerance.
    Converged,

    /// Ran every iteration without passing the feasibility check.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a primal-dual run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Final primal variable.
    pub x: f64,

    /// Final multiplier.
    pub lambda: f64,

    /// Every x visited, starting with the initial guess.
    pub history: Vec<f64>,

    /// Iteration at which the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, x: f64, lambda: f64, history: Vec<f64>, iters: usize) -> Self {
        Self {
            status,
            x,
            lambda,
            history,
            iters,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.4}, lambda={:.4}", self.x, self.lambda)
    }
}
