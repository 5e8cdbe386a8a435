/// Event emitted by the stationarity solver for each evaluated point.
///
/// Iteration 0 is the initial guess; iterations `1..` follow Newton steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration that produced this point.
    pub iter: usize,

    /// The primal variable.
    pub x: f64,

    /// The Lagrange multiplier.
    pub lambda: f64,

    /// `[∂L/∂x, g]` at this point.
    pub residuals: [f64; 2],
}

impl Event {
    pub(super) fn new(iter: usize, point: [f64; 2], residuals: [f64; 2]) -> Self {
        Self {
            iter,
            x: point[0],
            lambda: point[1],
            residuals,
        }
    }

    /// Returns the largest absolute residual.
    #[must_use]
    pub fn residual_norm(&self) -> f64 {
        super::best::norm(self.residuals)
    }
}
