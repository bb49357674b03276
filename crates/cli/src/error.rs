use std::io;

use thiserror::Error;

use teleporter_solvers::search::{breadth_first, linear};

/// Errors that can end a puzzle run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("search failed: {0}")]
    Search(#[from] linear::Error),

    #[error("traversal failed: {0}")]
    Traverse(#[from] breadth_first::Error),
}
