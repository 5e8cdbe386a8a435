//! Reusable observers and plotting for the lagrange solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//! - [`trace`] — [`TraceObserver`], which writes one line per solver event
//! - [`scene`] — [`Scene`], the data behind the solution plot
//!
//! # Features
//!
//! - `plot` — Enables [`plot::show`] for rendering a [`Scene`] in a native
//!   window via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod scene;
pub mod trace;
pub mod traits;

#[cfg(feature = "plot")]
pub mod plot;

pub use scene::Scene;
pub use trace::TraceObserver;
