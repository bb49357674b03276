//! Reusable observers for the teleporter solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`teleporter_solvers`].
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasCandidate`], [`CanStopEarly`], [`CanSkip`])
//!
//! # Observers
//!
//! - [`Progress`]: writes a `Checking: <candidate>...` line per candidate
//! - [`Cancel`]: stops a solver once a shared flag is raised
//!
//! [`Observer`]: teleporter_core::Observer
//! [`HasCandidate`]: traits::HasCandidate
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanSkip`]: traits::CanSkip

pub mod traits;

mod cancel;
mod progress;

pub use cancel::Cancel;
pub use progress::Progress;
