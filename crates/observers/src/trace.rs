//! An observer that writes one line per solver event.
//!
//! [`TraceObserver`] works with any solver whose events implement
//! [`HasIterate`] and [`HasResidual`]:
//!
//! ```text
//! primal-dual iter=1 x=4.700000 lambda=-0.609000 residual=6.090e0
//! ```
//!
//! Write failures do not interrupt the solver. The first one is kept and
//! returned from [`TraceObserver::finish`].

use std::io::{self, Write};

use lagrange_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// Writes a line per event to `W`, optionally thinned to every `n`th event.
pub struct TraceObserver<W> {
    writer: W,
    label: String,
    every: usize,
    error: Option<io::Error>,
}

impl<W: Write> TraceObserver<W> {
    /// Creates an observer that prefixes each line with `label`.
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
            every: 1,
            error: None,
        }
    }

    /// Only writes events whose iteration is a multiple of `every`.
    ///
    /// A value of zero is treated as one.
    #[must_use]
    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }

    /// Flushes the writer and hands it back.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered while tracing, or the
    /// error from the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_event<E: HasIterate + HasResidual>(&mut self, event: &E) -> io::Result<()> {
        write!(
            self.writer,
            "{} iter={} x={:.6}",
            self.label,
            event.iteration(),
            event.x()
        )?;
        if let Some(lambda) = event.lambda() {
            write!(self.writer, " lambda={lambda:.6}")?;
        }
        writeln!(self.writer, " residual={:.3e}", event.residual())
    }
}

impl<W, E, A> Observer<E, A> for TraceObserver<W>
where
    W: Write,
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() || event.iteration() % self.every != 0 {
            return None;
        }
        if let Err(error) = self.write_event(event) {
            self.error = Some(error);
        }
        None
    }
}

/// Allows `&mut TraceObserver<W>` to be passed to solvers that take an
/// observer by value, so [`TraceObserver::finish`] can be called afterwards.
impl<W, E, A> Observer<E, A> for &mut TraceObserver<W>
where
    W: Write,
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
