//! The reference problem used throughout the solvers' tests and the demo.
//!
//! Maximize `f(x) = 1 - 0.5·(x - 2)²` subject to `g0(x) = (x - 1)² + 0.3 = 1.5`.
//!
//! The feasible set is `x = 1 ± √1.2`, and the constrained maximum of `f`
//! lies at `x = 1 + √1.2 ≈ 2.0954`.

use super::Problem;

/// The constraint target `C`.
pub const TARGET: f64 = 1.5;

/// The finite-difference step `H`.
pub const STEP: f64 = 0.01;

/// The objective `f(x) = 1 - 0.5·(x - 2)²`.
#[must_use]
pub fn objective(x: f64) -> f64 {
    let offset = x - 2.0;
    1.0 - 0.5 * offset * offset
}

/// The constraint surface `g0(x) = (x - 1)² + 0.3`.
#[must_use]
pub fn surface(x: f64) -> f64 {
    let offset = x - 1.0;
    offset * offset + 0.3
}

/// Type of the reference problem.
pub type Reference = Problem<fn(f64) -> f64, fn(f64) -> f64>;

/// Returns the reference problem with target [`TARGET`].
#[must_use]
pub fn problem() -> Reference {
    Problem::new(objective as fn(f64) -> f64, surface as fn(f64) -> f64, TARGET)
}
