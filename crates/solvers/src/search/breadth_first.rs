//! Breadth-first search over the states of a traversal problem.
//!
//! # Algorithm
//!
//! States are explored in order of the number of steps taken to reach them,
//! so the first goal found is reached by a shortest path. From each state the
//! problem's steps are tried in the order [`TraversalProblem::steps`] returns
//! them, which makes the reported path deterministic when several shortest
//! paths exist.
//!
//! A state is not expanded when:
//! - it is a goal (the search ends there),
//! - its key was already seen at strictly fewer steps,
//! - the problem reports it as a dead end,
//! - it lies deeper than [`Config::max_depth`].
//!
//! States deeper than the limit are still checked against the goal, so paths
//! of up to `max_depth + 1` steps can be reported.
//!
//! # Observer Events
//!
//! The solver emits one [`Event::Visited`] per dequeued state, before the goal
//! check. Observers can return [`Action::StopEarly`] to halt, or
//! [`Action::Prune`] to drop the state without checking or expanding it.
//!
//! [`TraversalProblem::steps`]: teleporter_core::TraversalProblem::steps

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Found, Solution, Status};

use std::collections::{HashMap, VecDeque};

use teleporter_core::{Observer, TraversalProblem};

/// A queued state and the steps that reached it.
struct Node<S, T> {
    state: S,
    path: Vec<T>,
}

/// Finds a shortest path from the start state to a goal state.
///
/// See the [module docs](self) for pruning rules and observer actions.
///
/// # Errors
///
/// Returns an error if the problem fails to advance a state, or if the queue
/// grows beyond [`Config::max_queue`].
pub fn search<P, Obs>(
    problem: &P,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<P::State, P::Step>, Error>
where
    P: TraversalProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let mut queue = VecDeque::from([Node {
        state: problem.start(),
        path: Vec::new(),
    }]);
    let mut seen: HashMap<P::Key, usize> = HashMap::new();
    let mut visited = 0;

    while let Some(node) = queue.pop_front() {
        visited += 1;
        let depth = node.path.len();

        let event = Event::Visited {
            depth,
            queued: queue.len(),
            state: &node.state,
            path: &node.path,
        };
        match observer.observe(&event) {
            Some(Action::StopEarly) => {
                log::debug!("breadth-first search stopped by observer at depth {depth}");
                return Ok(Solution::stopped(visited));
            }
            Some(Action::Prune) => continue,
            None => {}
        }

        if problem.is_goal(&node.state) {
            log::debug!("goal reached in {depth} steps after {visited} visits");
            return Ok(Solution::found(
                Found {
                    state: node.state,
                    path: node.path,
                },
                visited,
            ));
        }

        let key = problem.key(&node.state);
        if seen.get(&key).is_some_and(|&first| first < depth) {
            continue;
        }
        if problem.is_dead_end(&node.state) {
            continue;
        }
        seen.insert(key, depth);

        if depth > config.max_depth() {
            continue;
        }

        for &step in problem.steps() {
            let Some(next) = problem.advance(&node.state, step).map_err(Error::problem)? else {
                continue;
            };
            if queue.len() >= config.max_queue() {
                return Err(Error::QueueLimit {
                    limit: config.max_queue(),
                });
            }
            let mut path = Vec::with_capacity(depth + 1);
            path.extend_from_slice(&node.path);
            path.push(step);
            queue.push_back(Node { state: next, path });
        }
    }

    log::debug!("breadth-first search exhausted after {visited} visits");
    Ok(Solution::exhausted(visited))
}

/// Finds a shortest path without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem fails to advance a state, or if the queue
/// grows beyond [`Config::max_queue`].
pub fn search_unobserved<P>(
    problem: &P,
    config: &Config,
) -> Result<Solution<P::State, P::Step>, Error>
where
    P: TraversalProblem,
{
    search(problem, config, ())
}
