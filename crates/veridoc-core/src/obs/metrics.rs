//! Process-local validation counters.
//!
//! State is thread-local: each thread validates its own entities and
//! observes its own counters, which keeps the engine lock-free.

use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<ObsState> = RefCell::new(ObsState::default());
}

///
/// ObsState
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ObsState {
    pub validate_calls: u64,
    pub validate_failures: u64,
    pub issues_reported: u64,
    pub links_persisted: u64,
    pub links_blocked: u64,
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut ObsState) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Read a copy of the current thread's counters.
#[must_use]
pub fn snapshot() -> ObsState {
    STATE.with(|state| *state.borrow())
}

/// Reset the current thread's counters. Intended for tests.
pub fn reset() {
    STATE.with(|state| *state.borrow_mut() = ObsState::default());
}
