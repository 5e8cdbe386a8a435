use lagrange_core::{Differentiate, EqualityProblem, Lagrangian};

/// The stationarity system `F(x, λ) = [∂L/∂x, g(x)]` of a problem.
pub(super) struct System<'d, P, D> {
    lagrangian: Lagrangian<P>,
    diff: &'d D,
}

impl<'d, P: EqualityProblem, D: Differentiate> System<'d, P, D> {
    pub(super) fn new(lagrangian: Lagrangian<P>, diff: &'d D) -> Self {
        Self { lagrangian, diff }
    }

    /// Evaluates `F` at `[x, λ]`.
    pub(super) fn residuals(&self, point: [f64; 2]) -> [f64; 2] {
        let [x, lambda] = point;
        [
            self.lagrangian.partial_x(self.diff, x, lambda),
            self.lagrangian.partial_lambda(x),
        ]
    }

    /// Builds the Jacobian of `F` at `[x, λ]` one column at a time.
    pub(super) fn jacobian(&self, point: [f64; 2]) -> Jacobian {
        let [x, lambda] = point;
        let mut rows = [[0.0; 2]; 2];

        for (i, row) in rows.iter_mut().enumerate() {
            row[0] = self
                .diff
                .derivative(&|t: f64| self.residuals([t, lambda])[i], x);
            row[1] = self
                .diff
                .derivative(&|t: f64| self.residuals([x, t])[i], lambda);
        }

        Jacobian { rows }
    }
}

/// A 2×2 Jacobian, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Jacobian {
    rows: [[f64; 2]; 2],
}

impl Jacobian {
    /// Solves `J·Δ = -F` for the Newton step `Δ`.
    ///
    /// Returns `None` if the determinant is zero or not finite.
    pub(super) fn newton_step(&self, residuals: [f64; 2]) -> Option<[f64; 2]> {
        let [[a, b], [c, d]] = self.rows;
        let det = a * d - b * c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let [r0, r1] = residuals;
        Some([-(d * r0 - b * r1) / det, -(a * r1 - c * r0) / det])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use lagrange_core::{CentralDifference, reference};

    #[test]
    fn step_solves_linear_system() {
        // J = [[2, 1], [1, 3]], F = [3, 5] → Δ = -J⁻¹F = [-0.8, -1.4]
        let jacobian = Jacobian {
            rows: [[2.0, 1.0], [1.0, 3.0]],
        };

        let [dx, dy] = jacobian.newton_step([3.0, 5.0]).unwrap();

        assert_relative_eq!(dx, -0.8, epsilon = 1e-12);
        assert_relative_eq!(dy, -1.4, epsilon = 1e-12);
    }

    #[test]
    fn singular_jacobian_has_no_step() {
        let jacobian = Jacobian {
            rows: [[1.0, 2.0], [2.0, 4.0]],
        };
        assert!(jacobian.newton_step([1.0, 1.0]).is_none());

        let jacobian = Jacobian {
            rows: [[f64::NAN, 0.0], [0.0, 1.0]],
        };
        assert!(jacobian.newton_step([1.0, 1.0]).is_none());
    }

    #[test]
    fn reference_jacobian_matches_analytic() {
        let problem = reference::problem();
        let diff = CentralDifference::default();
        let system = System::new(Lagrangian::new(&problem), &diff);

        // ∂F₀/∂x = -1 + 2λ, ∂F₀/∂λ = 2(x - 1), ∂F₁/∂x = 2(x - 1), ∂F₁/∂λ = 0
        let (x, lambda) = (5.0, 0.25);
        let Jacobian { rows } = system.jacobian([x, lambda]);

        assert_relative_eq!(rows[0][0], -1.0 + 2.0 * lambda, epsilon = 1e-8);
        assert_relative_eq!(rows[0][1], 2.0 * (x - 1.0), epsilon = 1e-8);
        assert_relative_eq!(rows[1][0], 2.0 * (x - 1.0), epsilon = 1e-8);
        assert_relative_eq!(rows[1][1], 0.0, epsilon = 1e-12);
    }
}
