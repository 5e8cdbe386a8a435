use crate::ScalarFn;

/// Defines a scalar optimization problem with one equality constraint.
///
/// The problem is to optimize `objective(x)` subject to
/// `surface(x) = target()`. Solvers work with the shifted form
/// [`constraint`](Self::constraint), `g(x) = surface(x) - target()`,
/// so that feasibility means `g(x) = 0`.
pub trait EqualityProblem {
    /// The objective `f(x)`.
    fn objective(&self, x: f64) -> f64;

    /// The raw constraint surface `g0(x)`.
    fn surface(&self, x: f64) -> f64;

    /// The value `C` the constraint surface must reach.
    fn target(&self) -> f64;

    /// The shifted constraint `g(x) = g0(x) - C`.
    fn constraint(&self, x: f64) -> f64 {
        self.surface(x) - self.target()
    }

    /// The feasibility gap `|g(x)|`.
    fn residual(&self, x: f64) -> f64 {
        self.constraint(x).abs()
    }
}

/// An [`EqualityProblem`] assembled from two scalar functions and a target.
#[derive(Debug, Clone, Copy)]
pub struct Problem<F, G> {
    objective: F,
    surface: G,
    target: f64,
}

impl<F: ScalarFn, G: ScalarFn> Problem<F, G> {
    /// Creates a problem that optimizes `objective` subject to `surface(x) = target`.
    pub fn new(objective: F, surface: G, target: f64) -> Self {
        Self {
            objective,
            surface,
            target,
        }
    }

    /// Returns the same functions constrained to a different target.
    #[must_use]
    pub fn with_target(self, target: f64) -> Self {
        Self { target, ..self }
    }
}

impl<F: ScalarFn, G: ScalarFn> EqualityProblem for Problem<F, G> {
    fn objective(&self, x: f64) -> f64 {
        self.objective.eval(x)
    }

    fn surface(&self, x: f64) -> f64 {
        self.surface.eval(x)
    }

    fn target(&self) -> f64 {
        self.target
    }
}

impl<P: EqualityProblem + ?Sized> EqualityProblem for &P {
    fn objective(&self, x: f64) -> f64 {
        (**self).objective(x)
    }

    fn surface(&self, x: f64) -> f64 {
        (**self).surface(x)
    }

    fn target(&self) -> f64 {
        (**self).target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn line() -> Problem<impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
        Problem::new(|x: f64| -x, |x: f64| 2.0 * x, 4.0)
    }

    #[test]
    fn constraint_is_shifted_surface() {
        let problem = line();

        for x in [-3.0, 0.0, 1.5, 2.0, 10.0] {
            assert_relative_eq!(problem.constraint(x), problem.surface(x) - 4.0);
        }
        assert_relative_eq!(problem.constraint(2.0), 0.0);
    }

    #[test]
    fn residual_is_absolute_constraint() {
        let problem = line();

        assert_relative_eq!(problem.residual(0.0), 4.0);
        assert_relative_eq!(problem.residual(3.0), 2.0);
    }

    #[test]
    fn with_target_keeps_functions() {
        let problem = line().with_target(-2.0);

        assert_relative_eq!(problem.target(), -2.0);
        assert_relative_eq!(problem.objective(1.0), -1.0);
        assert_relative_eq!(problem.constraint(-1.0), 0.0);
    }

    #[test]
    fn references_are_problems() {
        fn target_of<P: EqualityProblem>(problem: P) -> f64 {
            problem.target()
        }

        let problem = line();
        assert_relative_eq!(target_of(&problem), 4.0);
    }
}
