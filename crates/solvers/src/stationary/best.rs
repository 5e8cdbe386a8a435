use super::{Solution, Status};

/// Largest absolute residual, or `NaN` if any residual is `NaN`.
pub(super) fn norm(residuals: [f64; 2]) -> f64 {
    let [a, b] = residuals;
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    a.abs().max(b.abs())
}

/// Tracks the best point encountered so far.
///
/// The best point is the one with the smallest residual norm. A `NaN` norm
/// never compares smaller, so it never displaces a previous point.
pub(super) struct Best {
    point: [f64; 2],
    residuals: [f64; 2],
    norm: f64,
}

impl Best {
    /// Starts tracking from the initial guess.
    pub(super) fn new(point: [f64; 2], residuals: [f64; 2]) -> Self {
        Self {
            point,
            residuals,
            norm: norm(residuals),
        }
    }

    /// Replaces the best point if the residual norm improves.
    pub(super) fn update(&mut self, point: [f64; 2], residuals: [f64; 2]) {
        let candidate = norm(residuals);
        if candidate < self.norm || (self.norm.is_nan() && !candidate.is_nan()) {
            *self = Self {
                point,
                residuals,
                norm: candidate,
            };
        }
    }

    /// Returns true if the best residual norm meets the tolerance.
    pub(super) fn is_converged(&self, residual_tol: f64) -> bool {
        self.norm <= residual_tol
    }

    /// Finalizes the solver using the best point.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution {
        Solution {
            status,
            x: self.point[0],
            lambda: self.point[1],
            residuals: self.residuals,
            iters,
        }
    }
}
