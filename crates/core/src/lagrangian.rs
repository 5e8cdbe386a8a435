use crate::{Differentiate, EqualityProblem};

/// The Lagrangian `L(x, λ) = f(x) + λ·g(x)` of an [`EqualityProblem`].
///
/// Stationary points of `L` in both `x` and `λ` are the candidate constrained
/// optima of the problem.
#[derive(Debug, Clone, Copy)]
pub struct Lagrangian<P> {
    problem: P,
}

impl<P: EqualityProblem> Lagrangian<P> {
    /// Wraps a problem.
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Returns the wrapped problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Evaluates `L(x, λ)`.
    pub fn value(&self, x: f64, lambda: f64) -> f64 {
        self.problem.objective(x) + lambda * self.problem.constraint(x)
    }

    /// Approximates `∂L/∂x` by differentiating `L(·, λ)` as a whole.
    pub fn partial_x<D: Differentiate>(&self, diff: &D, x: f64, lambda: f64) -> f64 {
        diff.derivative(&|t: f64| self.value(t, lambda), x)
    }

    /// Approximates `∂L/∂x` term by term, as `f'(x) + λ·g'(x)`.
    ///
    /// Mathematically the same as [`partial_x`](Self::partial_x); the two
    /// differ only in rounding.
    pub fn partial_x_by_terms<D: Differentiate>(&self, diff: &D, x: f64, lambda: f64) -> f64 {
        let df = diff.derivative(&|t: f64| self.problem.objective(t), x);
        let dg = diff.derivative(&|t: f64| self.problem.constraint(t), x);
        df + lambda * dg
    }

    /// Returns `∂L/∂λ = g(x)`.
    pub fn partial_lambda(&self, x: f64) -> f64 {
        self.problem.constraint(x)
    }
}
