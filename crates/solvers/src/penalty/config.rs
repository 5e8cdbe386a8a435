use thiserror::Error;

/// Configuration for the penalty solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_x: f64,
    penalty: f64,
    learning_rate: f64,
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a penalty solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial x must be finite")]
    Initial,

    #[error("penalty must be finite and positive")]
    Penalty,

    #[error("learning_rate must be finite and positive")]
    LearningRate,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_x: 5.0,
            penalty: 3.0,
            learning_rate: 0.01,
            max_iters: 4999,
            residual_tol: 1e-3,
        }
    }
}

impl Config {
    /// Creates a new config with validated values.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial x is not finite, the penalty or
    /// learning rate is not positive, or the tolerance is negative or
    /// non-finite.
    pub fn new(
        initial_x: f64,
        penalty: f64,
        learning_rate: f64,
        max_iters: usize,
        residual_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !initial_x.is_finite() {
            return Err(ConfigError::Initial);
        }
        if !penalty.is_finite() || penalty <= 0.0 {
            return Err(ConfigError::Penalty);
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ConfigError::LearningRate);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            initial_x,
            penalty,
            learning_rate,
            max_iters,
            residual_tol,
        })
    }

    /// Returns a copy with a different penalty weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the penalty is not finite and positive.
    pub fn with_penalty(self, penalty: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.initial_x,
            penalty,
            self.learning_rate,
            self.max_iters,
            self.residual_tol,
        )
    }

    /// Returns a copy with a different learning rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is not finite and positive.
    pub fn with_learning_rate(self, learning_rate: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.initial_x,
            self.penalty,
            learning_rate,
            self.max_iters,
            self.residual_tol,
        )
    }

    /// Returns a copy with a different feasibility tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn with_residual_tol(self, residual_tol: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.initial_x,
            self.penalty,
            self.learning_rate,
            self.max_iters,
            residual_tol,
        )
    }

    /// Returns a copy with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the starting x.
    #[must_use]
    pub fn initial_x(&self) -> f64 {
        self.initial_x
    }

    /// Returns the penalty weight `ρ`.
    #[must_use]
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Returns the step size `η`.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the feasibility tolerance; convergence requires `|g(x)| < tol`.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
