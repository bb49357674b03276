//! Solvers for brute-force search problems.
//!
//! # Modules
//!
//! - [`search::linear`]: tries candidates in order and reports the first match
//! - [`search::breadth_first`]: explores a state graph level by level

pub mod search;
