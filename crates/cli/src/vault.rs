//! The vault-grid puzzle.

use std::io::Write;

use teleporter_models::vault::{Direction, MAX_MOVES, Vault};
use teleporter_solvers::search::breadth_first::{self, Config};

use crate::Error;

/// Finds the shortest walk that opens the vault and writes it.
///
/// # Errors
///
/// Returns an error if the output cannot be written or the traversal fails.
pub fn run(out: &mut impl Write) -> Result<Option<Vec<Direction>>, Error> {
    let vault = Vault::default();
    let config = Config::default().with_max_depth(MAX_MOVES);

    let solution = breadth_first::search_unobserved(&vault, &config)?;
    log::debug!("vault search visited {} states", solution.visited);

    let Some(found) = solution.found else {
        writeln!(out, "No walk opens the vault")?;
        return Ok(None);
    };

    let moves: Vec<String> = found.path.iter().map(ToString::to_string).collect();
    writeln!(out, "Path: {}", moves.join(", "))?;

    let cells: Vec<String> = vault
        .cells_along(&found.path)
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(out, "Expression: {} = {}", cells.join(" "), found.state.value)?;

    Ok(Some(found.path))
}
