//! Cooperative cancellation through a shared flag.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use teleporter_core::Observer;

use crate::traits::CanStopEarly;

/// An observer that stops the solver once its flag is raised.
///
/// The flag is checked on every event, so a search running on one thread can
/// be cancelled from another (for example from a Ctrl-C handler).
#[derive(Debug, Clone, Default)]
pub struct Cancel {
    flag: Arc<AtomicBool>,
}

impl Cancel {
    /// Creates an observer with a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an observer watching an existing flag.
    #[must_use]
    pub fn with_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Raises the flag; every clone of this observer will stop its solver.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once the flag has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancel {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_cancelled() {
            log::debug!("cancellation requested");
            return Some(A::stop_early());
        }
        None
    }
}
