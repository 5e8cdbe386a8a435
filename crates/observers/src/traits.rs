//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the three solvers.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that carry an iteration index and current x
//! - [`HasResidual`] — events that carry a residual magnitude
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use lagrange_core::Observer;
//! use lagrange_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use lagrange_solvers::{penalty, primal_dual, stationary};

/// An event that carries the solver's current iterate.
pub trait HasIterate {
    /// Returns the iteration that produced this event.
    fn iteration(&self) -> usize;

    /// Returns the current x.
    fn x(&self) -> f64;

    /// Returns the current multiplier, if the solver has one.
    fn lambda(&self) -> Option<f64> {
        None
    }
}

/// An event that carries a residual magnitude.
pub trait HasResidual {
    /// Returns a non-negative measure of how far the iterate is from a solution.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- stationary ---

impl HasIterate for stationary::Event {
    fn iteration(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn lambda(&self) -> Option<f64> {
        Some(self.lambda)
    }
}

impl HasResidual for stationary::Event {
    fn residual(&self) -> f64 {
        self.residual_norm()
    }
}

// --- primal_dual ---

impl HasIterate for primal_dual::Event {
    fn iteration(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn lambda(&self) -> Option<f64> {
        Some(self.lambda)
    }
}

impl HasResidual for primal_dual::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- penalty ---

impl HasIterate for penalty::Event {
    fn iteration(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for penalty::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for stationary::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for primal_dual::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for penalty::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
