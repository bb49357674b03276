//! The coin-order puzzle.

use std::io::Write;

use teleporter_models::coins::{Coin, CoinEquation, CoinOrder, orderings};
use teleporter_solvers::search::linear;

use crate::Error;

/// Finds the coin ordering that balances the equation and writes it.
///
/// # Errors
///
/// Returns an error if the output cannot be written or evaluation fails.
pub fn run(out: &mut impl Write) -> Result<Option<Vec<Coin>>, Error> {
    let problem = CoinOrder::default();
    let solution = linear::search_unobserved(&CoinEquation, &problem, orderings(&Coin::ALL))?;
    log::debug!("coin search evaluated {} orderings", solution.evaluated);

    let Some(order) = solution.candidate() else {
        writeln!(out, "No ordering balances the equation")?;
        return Ok(None);
    };

    let names: Vec<&str> = order.iter().map(|coin| coin.name()).collect();
    writeln!(out, "Correct order: {}", names.join(", "))?;

    let values: Vec<i64> = order.iter().map(|coin| coin.value()).collect();
    if let [a, b, c, d, e] = values.as_slice() {
        let target = problem.target;
        writeln!(out, "({a} + {b}*{c}^2 + {d}^3 - {e} = {target})")?;
    }
    Ok(Some(order.clone()))
}
