use std::error::Error as StdError;

/// Errors that can occur during breadth-first search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("queue exceeded {limit} states")]
    QueueLimit { limit: usize },
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
