//! Construction and destruction bookkeeping shared by resource handles.

use std::sync::{Arc, LazyLock};

use crate::counter::Counter;

static GLOBAL: LazyLock<Arc<LifecycleCounters>> = LazyLock::new(LifecycleCounters::new);

/// A pair of counters recording how many resource handles were constructed and how many
/// were dropped.
///
/// Handles keep an `Arc` to the set they were constructed against and report their own
/// drop to the same set. The process-wide set is returned by [`LifecycleCounters::global`];
/// independent sets created with [`LifecycleCounters::new`] keep unrelated runs (tests in
/// particular) from observing each other's events.
#[derive(Debug, Default)]
pub struct LifecycleCounters {
    constructed: Counter,
    destructed: Counter,
}

impl LifecycleCounters {
    /// Creates an independent counter set starting at 0/0.
    pub fn new() -> Arc<LifecycleCounters> {
        Arc::new(LifecycleCounters::default())
    }

    /// The process-wide counter set used by [`ResourceHandle::new`](crate::ResourceHandle::new).
    pub fn global() -> &'static Arc<LifecycleCounters> {
        &GLOBAL
    }

    pub fn total_constructed(&self) -> u64 {
        self.constructed.read()
    }

    pub fn total_destructed(&self) -> u64 {
        self.destructed.read()
    }

    /// Number of constructions not yet matched by a destruction.
    ///
    /// Saturates at 0: husks produced by explicit transfers are dropped without having
    /// been counted as constructions.
    pub fn live(&self) -> u64 {
        self.snapshot().live()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            constructed: self.constructed.read(),
            destructed: self.destructed.read(),
        }
    }

    /// Sets both counters back to 0.
    ///
    /// Must only be called between independent runs. Handles that are still alive keep
    /// reporting their drop afterwards, which would leave the counters describing neither
    /// the old run nor the new one.
    pub fn reset(&self) {
        self.constructed.reset();
        self.destructed.reset();
    }

    pub(crate) fn record_construction(&self) {
        self.constructed.increment();
    }

    pub(crate) fn record_destruction(&self) {
        self.destructed.increment();
    }
}

/// Point-in-time copy of a [`LifecycleCounters`] set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub constructed: u64,
    pub destructed: u64,
}

impl CounterSnapshot {
    pub fn live(&self) -> u64 {
        self.constructed.saturating_sub(self.destructed)
    }
}

impl std::fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Constructions: {}, Destructions: {}",
            self.constructed, self.destructed
        )
    }
}
