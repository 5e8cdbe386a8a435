use std::fmt;

/// Indicates how the stationarity solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All residuals are within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The Jacobian could not be inverted, so no Newton step was possible.
    SingularJacobian,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of solving the stationarity system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the constrained optimum.
    pub x: f64,

    /// Lagrange multiplier at the reported point.
    pub lambda: f64,

    /// `[∂L/∂x, g]` at the reported point.
    pub residuals: [f64; 2],

    /// Newton steps taken when the solver finished.
    pub iters: usize,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.4}, lambda={:.4}", self.x, self.lambda)
    }
}
