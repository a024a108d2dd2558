//! Test utilities for the tenure crates.
//!
//! The main helper is [`TraceCapture`], a `log` backend that keeps every record in memory,
//! tagged with the thread that emitted it. Tests run in parallel on separate threads, so
//! reading back only the current thread's records keeps them from seeing each other's
//! traces.

pub mod trace;

pub use trace::{CapturedRecord, TraceCapture};
