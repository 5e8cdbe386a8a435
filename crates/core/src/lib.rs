//! Core traits and types for equality-constrained scalar optimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFn`] — a pure mapping `f64 -> f64`
//! - [`EqualityProblem`] — an objective, a constraint surface, and a target
//!   value that the surface must reach
//! - [`Differentiate`] — the single derivative interface shared by all solvers,
//!   implemented by [`CentralDifference`]
//! - [`Lagrangian`] — `L(x, λ) = f(x) + λ·g(x)` for a problem
//! - [`Observer`] — receives solver events and optionally returns control actions

mod derivative;
mod function;
mod lagrangian;
mod observer;
mod problems;

pub use derivative::{CentralDifference, Differentiate, StepError};
pub use function::ScalarFn;
pub use lagrangian::Lagrangian;
pub use observer::Observer;
pub use problems::{EqualityProblem, Problem, reference};
