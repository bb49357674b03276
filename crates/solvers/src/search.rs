//! Solvers that search a finite space exhaustively.
//!
//! A [`SearchProblem`] maps candidates to model inputs, calls the model, and
//! decides whether the output is a solution. A [`TraversalProblem`] describes a
//! graph of states instead, with no model in between.
//!
//! # Solvers
//!
//! - [`linear`]: ordered scan over a candidate sequence
//! - [`breadth_first`]: shortest-path exploration of a traversal problem
//!
//! [`SearchProblem`]: teleporter_core::SearchProblem
//! [`TraversalProblem`]: teleporter_core::TraversalProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod breadth_first;
pub mod linear;
