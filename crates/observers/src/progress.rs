//! Progress observer that announces each candidate as it is tried.

use std::{fmt::Display, io};

use teleporter_core::Observer;

use crate::traits::{CanStopEarly, HasCandidate};

/// An observer that writes `Checking: <candidate>...` for every candidate.
///
/// Lines are written in the order the solver tries candidates, before each
/// one is evaluated. The first write failure is kept and the solver is asked
/// to stop; [`Progress::finish`] reports it.
///
/// # Usage
///
/// ```ignore
/// let mut progress = Progress::new(io::stdout().lock());
/// let solution = linear::search(&model, &problem, candidates, &mut progress)?;
/// let stdout = progress.finish()?;
/// ```
#[derive(Debug)]
pub struct Progress<W> {
    out: W,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: io::Write> Progress<W> {
    /// Creates a progress observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines: 0,
            error: None,
        }
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing progress, or a flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn announce(&mut self, candidate: &impl Display) -> io::Result<()> {
        writeln!(self.out, "Checking: {candidate}...")?;
        self.lines += 1;
        Ok(())
    }
}

impl<W, E, A> Observer<E, A> for Progress<W>
where
    W: io::Write,
    E: HasCandidate,
    E::Candidate: Display,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let candidate = event.checking()?;
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        if let Err(error) = self.announce(candidate) {
            log::error!("progress output failed: {error}");
            self.error = Some(error);
            return Some(A::stop_early());
        }
        None
    }
}

/// Allows `&mut Progress<W>` to be passed to solvers that take an observer
/// by value, so [`Progress::finish`] can be called after the search completes.
impl<W, E, A> Observer<E, A> for &mut Progress<W>
where
    W: io::Write,
    E: HasCandidate,
    E::Candidate: Display,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use teleporter_core::Word;
    use teleporter_models::{ackermann::Ackermann, teleporter::Teleporter};
    use teleporter_solvers::search::linear::{self, Status};

    /// Accepts a fixed number of bytes, then fails every write.
    #[derive(Debug)]
    struct Brittle {
        written: Vec<u8>,
        capacity: usize,
    }

    impl io::Write for Brittle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.capacity {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_candidate() {
        let mut progress = Progress::new(Vec::new());

        let solution = linear::search(
            &Ackermann::default(),
            &Teleporter::default(),
            Teleporter::candidates().take(3),
            &mut progress,
        )
        .expect("should complete");

        assert_eq!(solution.status, Status::Exhausted);
        assert_eq!(progress.lines(), 3);

        let out = String::from_utf8(progress.finish().unwrap()).unwrap();
        assert_eq!(out, "Checking: 0...\nChecking: 1...\nChecking: 2...\n");
    }

    #[test]
    fn ignores_outcome_events() {
        let mut progress = Progress::new(Vec::new());
        let problem = Teleporter {
            target: 13_234,
            ..Teleporter::default()
        };

        let solution = linear::search(
            &Ackermann::default(),
            &problem,
            Teleporter::candidates(),
            &mut progress,
        )
        .expect("should complete");

        assert_eq!(solution.candidate(), Some(&Word::new(2)));
        assert_eq!(progress.lines(), 3);
    }

    #[test]
    fn write_failure_stops_the_search() {
        let mut progress = Progress::new(Brittle {
            written: Vec::new(),
            capacity: "Checking: 0...\n".len(),
        });

        let solution = linear::search(
            &Ackermann::default(),
            &Teleporter::default(),
            Teleporter::candidates(),
            &mut progress,
        )
        .expect("observer stops, solver does not fail");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.evaluated, 1);
        assert_eq!(progress.lines(), 1);

        let error = progress.finish().expect_err("write failed");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
