use std::convert::Infallible;

use thiserror::Error;

use teleporter_core::{Model, SearchProblem};

use super::{Action, Error, Event, Status, search, search_unobserved};

/// Squares its input: f(x) = x².
struct Square;

impl Model for Square {
    type Input = i64;
    type Output = i64;
    type Error = Infallible;

    fn call(&self, x: &i64) -> Result<i64, Self::Error> {
        Ok(x * x)
    }
}

/// Accepts a candidate when the model output equals `target`.
struct OutputEquals {
    target: i64,
}

impl SearchProblem for OutputEquals {
    type Candidate = i64;
    type Input = i64;
    type Output = i64;
    type Error = Infallible;

    fn input(&self, candidate: &i64) -> Result<i64, Self::Error> {
        Ok(*candidate)
    }

    fn is_match(&self, _input: &i64, output: &i64) -> Result<bool, Self::Error> {
        Ok(*output == self.target)
    }
}

#[test]
fn finds_first_match_in_supplied_order() {
    let problem = OutputEquals { target: 49 };

    let solution = search_unobserved(&Square, &problem, -10..10).expect("should complete");

    assert_eq!(solution.status, Status::Found);
    assert_eq!(solution.candidate(), Some(&-7));

    let found = solution.found.expect("a match");
    assert_eq!(found.index, 3);
    assert_eq!(found.snapshot.output, 49);
    assert_eq!(solution.evaluated, 4);
}

#[test]
fn exhausts_without_match() {
    let problem = OutputEquals { target: 2 };

    let solution = search_unobserved(&Square, &problem, 0..5).expect("should complete");

    assert_eq!(solution.status, Status::Exhausted);
    assert!(solution.found.is_none());
    assert_eq!(solution.evaluated, 5);
}

#[test]
fn empty_sequence_is_exhausted() {
    let problem = OutputEquals { target: 0 };

    let solution = search_unobserved(&Square, &problem, 0..0).expect("should complete");

    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(solution.evaluated, 0);
}

#[test]
fn checking_precedes_each_evaluation_and_stops_at_match() {
    let problem = OutputEquals { target: 9 };

    let mut log = Vec::new();
    let observer = |event: &Event<'_, _, _>| -> Option<Action> {
        let label = match event {
            Event::Checking { .. } => "checking",
            Event::Evaluated { matched: true, .. } => "matched",
            Event::Evaluated { .. } => "evaluated",
            Event::ModelFailed { .. } | Event::ProblemFailed { .. } => "failed",
        };
        log.push((label, event.index(), *event.candidate()));
        None
    };

    let solution = search(&Square, &problem, 0..100, observer).expect("should complete");

    assert_eq!(solution.candidate(), Some(&3));
    assert_eq!(
        log,
        vec![
            ("checking", 0, 0),
            ("evaluated", 0, 0),
            ("checking", 1, 1),
            ("evaluated", 1, 1),
            ("checking", 2, 2),
            ("evaluated", 2, 2),
            ("checking", 3, 3),
            ("matched", 3, 3),
        ]
    );
}

#[test]
fn observer_can_stop_early() {
    let problem = OutputEquals { target: 10_000 };

    let observer = |event: &Event<'_, _, _>| match event {
        Event::Checking { index, .. } if *index == 5 => Some(Action::StopEarly),
        _ => None,
    };

    let solution = search(&Square, &problem, 0..1_000, observer).expect("should complete");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.found.is_none());
    assert_eq!(solution.evaluated, 5);
}

#[test]
fn stop_early_discards_a_match() {
    let problem = OutputEquals { target: 4 };

    let observer = |event: &Event<'_, _, _>| event.is_match().then_some(Action::StopEarly);

    let solution = search(&Square, &problem, 0..10, observer).expect("should complete");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.found.is_none());
    assert_eq!(solution.evaluated, 3);
}

#[test]
fn skip_on_checking_avoids_evaluation() {
    // -2 and 2 both square to 4; skipping negatives must report 2.
    let problem = OutputEquals { target: 4 };

    let observer = |event: &Event<'_, _, _>| match event {
        Event::Checking { candidate, .. } if **candidate < 0 => Some(Action::Skip),
        _ => None,
    };

    let solution = search(&Square, &problem, -3..=3, observer).expect("should complete");

    assert_eq!(solution.candidate(), Some(&2));
    assert_eq!(solution.found.as_ref().map(|found| found.index), Some(5));
    assert_eq!(solution.evaluated, 3);
}

#[test]
fn skip_on_evaluated_rejects_a_match() {
    let problem = OutputEquals { target: 4 };

    let mut matches_seen = 0;
    let observer = |event: &Event<'_, _, _>| {
        if event.is_match() {
            matches_seen += 1;
            if matches_seen == 1 {
                return Some(Action::Skip);
            }
        }
        None
    };

    let solution = search(&Square, &problem, [-2, 0, 2], observer).expect("should complete");

    assert_eq!(solution.candidate(), Some(&2));
}

/// Fails for odd inputs, halves even ones.
struct HalveEven;

#[derive(Debug, Error)]
#[error("odd input: {0}")]
struct OddInput(i64);

impl Model for HalveEven {
    type Input = i64;
    type Output = i64;
    type Error = OddInput;

    fn call(&self, x: &i64) -> Result<i64, Self::Error> {
        if x % 2 == 0 { Ok(x / 2) } else { Err(OddInput(*x)) }
    }
}

#[test]
fn model_error_aborts_search() {
    let problem = OutputEquals { target: 5 };

    let result = search_unobserved(&HalveEven, &problem, [2, 4, 7, 10]);

    let error = result.expect_err("odd input should fail");
    assert!(matches!(error, Error::Model(_)));
    assert_eq!(error.to_string(), "model error: odd input: 7");
}

#[test]
fn skip_recovers_from_model_error() {
    let problem = OutputEquals { target: 5 };

    let mut failures = Vec::new();
    let observer = |event: &Event<'_, HalveEven, OutputEquals>| match event {
        Event::ModelFailed {
            candidate, error, ..
        } => {
            failures.push((**candidate, error.0));
            Some(Action::Skip)
        }
        _ => None,
    };

    let solution = search(&HalveEven, &problem, [1, 3, 10, 12], observer).expect("recovered");

    assert_eq!(solution.candidate(), Some(&10));
    assert_eq!(failures, vec![(1, 1), (3, 3)]);
}

/// Rejects candidates above a limit when building the input.
struct BoundedInput {
    limit: i64,
}

#[derive(Debug, Error)]
#[error("candidate {0} is out of range")]
struct OutOfRange(i64);

impl SearchProblem for BoundedInput {
    type Candidate = i64;
    type Input = i64;
    type Output = i64;
    type Error = OutOfRange;

    fn input(&self, candidate: &i64) -> Result<i64, Self::Error> {
        if *candidate > self.limit {
            Err(OutOfRange(*candidate))
        } else {
            Ok(*candidate)
        }
    }

    fn is_match(&self, _input: &i64, output: &i64) -> Result<bool, Self::Error> {
        Ok(*output > 100)
    }
}

#[test]
fn problem_error_aborts_search() {
    let problem = BoundedInput { limit: 8 };

    let error = search_unobserved(&Square, &problem, 0..20).expect_err("9 is out of range");

    assert!(matches!(error, Error::Problem(_)));
}

#[test]
fn problem_failure_event_carries_candidate() {
    let problem = BoundedInput { limit: 8 };

    let mut failed_at = None;
    let observer = |event: &Event<'_, _, _>| -> Option<Action> {
        if let Event::ProblemFailed { index, .. } = event {
            failed_at = Some(*index);
            return Some(Action::StopEarly);
        }
        None
    };

    let solution = search(&Square, &problem, 0..20, observer).expect("stopped");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(failed_at, Some(9));
}
