//! Models and search problems for the teleporter workspace.
//!
//! - [`ackermann`]: a three-argument Ackermann variant in 16-bit arithmetic
//! - [`teleporter`]: the residue search driven over that function
//! - [`coins`]: orders five coins to satisfy a fixed equation
//! - [`vault`]: walks an arithmetic grid toward a target value

pub mod ackermann;
pub mod coins;
pub mod teleporter;
pub mod vault;
