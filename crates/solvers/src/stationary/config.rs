use thiserror::Error;

/// Configuration for the stationarity solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial: [f64; 2],
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a stationarity solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial guess must be finite")]
    Initial,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: [5.0, 0.0],
            max_iters: 100,
            residual_tol: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `initial` is the starting guess `[x₀, λ₀]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial guess is not finite, or if the
    /// tolerance is negative or non-finite.
    pub fn new(
        initial: [f64; 2],
        max_iters: usize,
        residual_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !initial.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Initial);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            initial,
            max_iters,
            residual_tol,
        })
    }

    /// Returns a copy with a different starting guess.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess is not finite.
    pub fn with_initial(self, initial: [f64; 2]) -> Result<Self, ConfigError> {
        Self::new(initial, self.max_iters, self.residual_tol)
    }

    /// Returns a copy with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the starting guess `[x₀, λ₀]`.
    #[must_use]
    pub fn initial(&self) -> [f64; 2] {
        self.initial
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the largest absolute residual.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
