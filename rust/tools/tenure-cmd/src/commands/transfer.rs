use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tenure_resource::{CounterSnapshot, LifecycleCounters, ResourceHandle};

pub const RESOURCE_NAME: &str = "texture2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    /// Counters right before the transfer.
    pub before: CounterSnapshot,
    /// Counters right after the transfer, both handles still alive.
    pub after: CounterSnapshot,
    pub target_name: String,
    pub source_name: String,
}

pub fn run(
    size: i64,
    counters: &Arc<LifecycleCounters>,
    out: &mut impl Write,
) -> Result<TransferReport> {
    counters.reset();
    writeln!(out, "\n=== Scenario 2: Move Semantics ===")?;

    let mut r1 = ResourceHandle::with_counters(RESOURCE_NAME, size, counters)?;
    let before = counters.snapshot();

    let r2 = r1.take();
    let after = counters.snapshot();

    writeln!(out, "r2 name: {}", r2.name())?;
    writeln!(out, "r1 name: {}", r1.name())?;
    writeln!(out, "Constructions after move: {}", after.constructed)?;
    writeln!(out, "(Should be same as before: {})", before.constructed)?;

    Ok(TransferReport {
        before,
        after,
        target_name: r2.name().to_string(),
        source_name: r1.name().to_string(),
    })
}
