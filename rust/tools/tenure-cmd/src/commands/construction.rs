use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tenure_resource::{CounterSnapshot, LifecycleCounters, ResourceHandle};

pub const RESOURCE_NAME: &str = "texture1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionReport {
    /// Counters while the resource is alive.
    pub in_scope: CounterSnapshot,
    /// Counters after the resource went out of scope.
    pub after_scope: CounterSnapshot,
}

pub fn run(
    size: i64,
    counters: &Arc<LifecycleCounters>,
    out: &mut impl Write,
) -> Result<ConstructionReport> {
    counters.reset();
    writeln!(out, "\n=== Scenario 1: Construction ===")?;

    let in_scope = {
        let _resource = ResourceHandle::with_counters(RESOURCE_NAME, size, counters)?;
        let snapshot = counters.snapshot();
        writeln!(out, "Constructions: {}", snapshot.constructed)?;
        writeln!(out, "Destructions: {}", snapshot.destructed)?;
        snapshot
    };

    let after_scope = counters.snapshot();
    writeln!(
        out,
        "After destruction - Destructions: {}",
        after_scope.destructed
    )?;

    Ok(ConstructionReport {
        in_scope,
        after_scope,
    })
}
