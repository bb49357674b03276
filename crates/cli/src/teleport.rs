//! The teleporter setting search.

use std::io::Write;

use teleporter_core::Word;
use teleporter_models::{ackermann::Ackermann, teleporter::Teleporter};
use teleporter_observers::Progress;
use teleporter_solvers::search::linear;

use crate::Error;

/// Searches every setting and writes the report.
///
/// # Errors
///
/// Returns an error if the output cannot be written or evaluation fails.
pub fn run(out: &mut impl Write) -> Result<i32, Error> {
    run_over(out, Teleporter::candidates())
}

/// Searches `candidates` in order and writes the report.
///
/// A `Checking: <v>...` line is written before each candidate is evaluated,
/// then the setting found (or `-1`) on the final line.
///
/// # Errors
///
/// Returns an error if the output cannot be written or evaluation fails.
pub fn run_over<I>(out: &mut impl Write, candidates: I) -> Result<i32, Error>
where
    I: IntoIterator<Item = Word>,
{
    let model = Ackermann::default();
    let problem = Teleporter::default();

    let mut progress = Progress::new(&mut *out);
    let solution = linear::search(&model, &problem, candidates, &mut progress)?;
    progress.finish()?;

    let setting = Teleporter::report(solution.candidate());
    log::debug!(
        "teleporter search {:?} after {} evaluations",
        solution.status,
        solution.evaluated
    );

    writeln!(out, "Magic Teleportation Number:     ~~~{setting}~~~")?;
    Ok(setting)
}
