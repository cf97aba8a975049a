//! Observability sink boundary.
//!
//! Engine logic MUST NOT depend on obs::metrics directly. All
//! instrumentation flows through ObsEvent and ObsSink; this module is
//! the only bridge between the engine and the counter state.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn ObsSink>>> = const { RefCell::new(None) };
}

///
/// ObsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum ObsEvent {
    LinkBlocked { edge: &'static str, issues: u64 },
    LinkPersisted { edge: &'static str },
    Validation { entity: &'static str, issues: u64 },
}

///
/// ObsSink
///

pub trait ObsSink {
    fn record(&self, event: ObsEvent);
}

///
/// CounterSink
/// Default sink when no scoped override is installed; writes into the
/// thread-local counter state.
///

struct CounterSink;

impl ObsSink for CounterSink {
    fn record(&self, event: ObsEvent) {
        match event {
            ObsEvent::Validation { issues, .. } => metrics::with_state_mut(|m| {
                m.validate_calls = m.validate_calls.saturating_add(1);
                if issues > 0 {
                    m.validate_failures = m.validate_failures.saturating_add(1);
                }
                m.issues_reported = m.issues_reported.saturating_add(issues);
            }),
            ObsEvent::LinkPersisted { .. } => metrics::with_state_mut(|m| {
                m.links_persisted = m.links_persisted.saturating_add(1);
            }),
            ObsEvent::LinkBlocked { .. } => metrics::with_state_mut(|m| {
                m.links_blocked = m.links_blocked.saturating_add(1);
            }),
        }
    }
}

/// Route one event through the scoped sink, falling back to counters.
pub fn record(event: ObsEvent) {
    let handled = SINK_OVERRIDE.with(|slot| {
        slot.borrow().as_ref().map(|sink| sink.record(event)).is_some()
    });

    if !handled {
        CounterSink.record(event);
    }
}

///
/// SinkGuard
/// Restores the previous sink when dropped.
///

pub struct SinkGuard {
    prev: Option<Rc<dyn ObsSink>>,
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        SINK_OVERRIDE.with(|slot| *slot.borrow_mut() = self.prev.take());
    }
}

/// Install a scoped sink override for the current thread.
#[must_use]
pub fn with_sink(sink: Rc<dyn ObsSink>) -> SinkGuard {
    let prev = SINK_OVERRIDE.with(|slot| slot.borrow_mut().replace(sink));
    SinkGuard { prev }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn counters_accumulate_without_an_override() {
        metrics::reset();
        record(ObsEvent::Validation {
            entity: "test/entity",
            issues: 2,
        });
        record(ObsEvent::Validation {
            entity: "test/entity",
            issues: 0,
        });

        let state = metrics::snapshot();
        assert_eq!(state.validate_calls, 2);
        assert_eq!(state.validate_failures, 1);
        assert_eq!(state.issues_reported, 2);
    }

    #[test]
    fn scoped_override_captures_and_restores() {
        metrics::reset();
        let capture = Rc::new(CaptureSink::default());
        {
            let _guard = with_sink(capture.clone());
            record(ObsEvent::LinkPersisted { edge: "test/edge" });
        }
        record(ObsEvent::LinkPersisted { edge: "test/edge" });

        assert_eq!(capture.seen.get(), 1);
        assert_eq!(metrics::snapshot().links_persisted, 1);
    }

    #[derive(Default)]
    struct CaptureSink {
        seen: Cell<u64>,
    }

    impl ObsSink for CaptureSink {
        fn record(&self, _event: ObsEvent) {
            self.seen.set(self.seen.get() + 1);
        }
    }
}
