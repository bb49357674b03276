use thiserror::Error;

/// Configuration for the breadth-first solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_depth: usize,
    max_queue: usize,
}

/// Errors that can occur when validating a breadth-first solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_queue must be positive")]
    MaxQueue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_queue: 1 << 20,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_queue` is zero.
    pub fn new(max_depth: usize, max_queue: usize) -> Result<Self, ConfigError> {
        if max_queue == 0 {
            return Err(ConfigError::MaxQueue);
        }

        Ok(Self {
            max_depth,
            max_queue,
        })
    }

    /// Returns this config with a different depth limit.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Returns the deepest level whose states are still expanded.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the maximum number of states waiting in the queue.
    #[must_use]
    pub fn max_queue(&self) -> usize {
        self.max_queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_queue() {
        assert_eq!(Config::new(12, 0), Err(ConfigError::MaxQueue));
    }

    #[test]
    fn keeps_limits() {
        let config = Config::new(12, 100).unwrap();
        assert_eq!(config.max_depth(), 12);
        assert_eq!(config.max_queue(), 100);
    }

    #[test]
    fn depth_can_be_replaced() {
        let config = Config::default().with_max_depth(12);
        assert_eq!(config.max_depth(), 12);
        assert_eq!(config.max_queue(), Config::default().max_queue());
    }
}
