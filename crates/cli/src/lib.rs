//! Entry points for the puzzle binaries.
//!
//! Each module exposes a `run` function that solves one puzzle and writes its
//! report to any [`std::io::Write`]. The binaries pass a locked standard
//! output; tests pass a `Vec<u8>`.

pub mod coins;
pub mod teleport;
pub mod vault;

mod error;

pub use error::Error;
