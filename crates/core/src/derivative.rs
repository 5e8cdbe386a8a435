use thiserror::Error;

use crate::ScalarFn;
use crate::problems::reference;

/// Approximates first derivatives of scalar functions.
///
/// This is the one derivative interface shared by every solver, so a solver
/// never hard-codes how derivatives are obtained.
pub trait Differentiate {
    /// Returns an approximation of `dφ/dx` at `x`.
    fn derivative<F: ScalarFn + ?Sized>(&self, function: &F, x: f64) -> f64;
}

/// Errors that can occur when constructing a [`CentralDifference`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    #[error("step must be finite and positive")]
    NotPositive,
}

/// Central finite differences with a fixed step `h`.
///
/// ```text
/// φ'(x) ≈ (φ(x + h) - φ(x - h)) / 2h
/// ```
///
/// The approximation error is `O(h²)` and exact for quadratics up to
/// rounding. Whether `h` suits the curvature of the function being
/// differentiated is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralDifference {
    step: f64,
}

impl CentralDifference {
    /// Creates a differentiator with the given step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite or not strictly positive.
    pub fn new(step: f64) -> Result<Self, StepError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(StepError::NotPositive);
        }
        Ok(Self { step })
    }

    /// Returns the finite-difference step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for CentralDifference {
    fn default() -> Self {
        Self {
            step: reference::STEP,
        }
    }
}

impl Differentiate for CentralDifference {
    fn derivative<F: ScalarFn + ?Sized>(&self, function: &F, x: f64) -> f64 {
        let h = self.step;
        (function.eval(x + h) - function.eval(x - h)) * 0.5 / h
    }
}

impl<D: Differentiate + ?Sized> Differentiate for &D {
    fn derivative<F: ScalarFn + ?Sized>(&self, function: &F, x: f64) -> f64 {
        (**self).derivative(function, x)
    }
}
