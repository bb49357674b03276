use thiserror::Error;

/// Evaluation limits for the [`Ackermann`](super::Ackermann) model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_pending: usize,
}

/// Errors that can occur when validating an Ackermann config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_pending must be positive")]
    MaxPending,
}

impl Default for Config {
    fn default() -> Self {
        // Each level above 2 holds at most 65,536 pending tasks at once.
        Self {
            max_pending: 1 << 20,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_pending` is zero.
    pub fn new(max_pending: usize) -> Result<Self, ConfigError> {
        if max_pending == 0 {
            return Err(ConfigError::MaxPending);
        }
        Ok(Self { max_pending })
    }

    /// Returns the maximum number of tasks that may wait on the work list.
    #[must_use]
    pub fn max_pending(&self) -> usize {
        self.max_pending
    }
}
