use lagrange_core::{Differentiate, EqualityProblem};

/// The penalized objective `φ(x) = f(x) + ρ·g(x)²/2`.
#[derive(Debug, Clone, Copy)]
pub struct Penalized<P> {
    problem: P,
    penalty: f64,
}

impl<P: EqualityProblem> Penalized<P> {
    /// Wraps `problem` with penalty weight `penalty`.
    pub fn new(problem: P, penalty: f64) -> Self {
        Self { problem, penalty }
    }

    /// Evaluates `φ(x)`.
    pub fn value(&self, x: f64) -> f64 {
        let g = self.problem.constraint(x);
        self.problem.objective(x) + 0.5 * self.penalty * g * g
    }

    /// Approximates `φ'(x) = f'(x) + ρ·g(x)·g'(x)` term by term.
    pub fn gradient<D: Differentiate>(&self, diff: &D, x: f64) -> f64 {
        let df = diff.derivative(&|t: f64| self.problem.objective(t), x);
        let dg = diff.derivative(&|t: f64| self.problem.constraint(t), x);
        df + self.penalty * self.problem.constraint(x) * dg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use lagrange_core::{CentralDifference, reference};

    #[test]
    fn value_adds_half_weighted_square() {
        let problem = reference::problem();
        let penalized = Penalized::new(&problem, 3.0);

        // f(3) = 0.5, g(3) = 2.8
        assert_relative_eq!(penalized.value(3.0), 0.5 + 1.5 * 2.8 * 2.8, epsilon = 1e-12);
    }

    #[test]
    fn zero_penalty_is_plain_objective() {
        let problem = reference::problem();
        let penalized = Penalized::new(&problem, 0.0);

        assert_relative_eq!(penalized.value(4.0), reference::objective(4.0));
    }

    #[test]
    fn gradient_matches_derivative_of_value() {
        let problem = reference::problem();
        let penalized = Penalized::new(&problem, 3.0);
        let diff = CentralDifference::new(1e-4).unwrap();

        for x in [-1.0, 0.5, 2.0, 5.0] {
            let by_value = diff.derivative(&|t: f64| penalized.value(t), x);
            assert_relative_eq!(
                penalized.gradient(&diff, x),
                by_value,
                epsilon = 1e-4,
                max_relative = 1e-6
            );
        }
    }
}
