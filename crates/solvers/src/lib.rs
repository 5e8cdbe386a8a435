//! Solvers for equality-constrained scalar optimization problems.
//!
//! Every solver takes an [`EqualityProblem`], a [`Differentiate`]
//! implementation, a validated config, and an [`Observer`]. They share no
//! state and can be run side by side on the same problem to compare methods.
//!
//! # Solvers
//!
//! - [`stationary`] — Newton iteration on the stationarity system
//!   `[∂L/∂x, g] = 0`, solving for `x` and `λ` together
//! - [`primal_dual`] — gradient ascent on `x` alternated with gradient
//!   descent on `λ`
//! - [`penalty`] — gradient descent on `f(x) + ρ·g(x)²/2` with a fixed `ρ`
//!
//! [`EqualityProblem`]: lagrange_core::EqualityProblem
//! [`Differentiate`]: lagrange_core::Differentiate
//! [`Observer`]: lagrange_core::Observer

pub mod penalty;
pub mod primal_dual;
pub mod stationary;
