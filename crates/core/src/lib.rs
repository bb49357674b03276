//! Core traits and types for the teleporter workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`SearchProblem`], [`TraversalProblem`]: problem traits that adapt
//!   search candidates to model inputs and decide what counts as a solution
//! - [`Word`]: a 16-bit signed integer with wraparound arithmetic

mod model;
mod observer;
mod problems;
mod word;

pub use observer::Observer;
pub use problems::{SearchProblem, TraversalProblem};
pub use word::Word;
pub use {model::Model, model::Snapshot};
