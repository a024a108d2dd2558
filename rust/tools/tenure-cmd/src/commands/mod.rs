//! Demonstration scenarios for tenure-cmd.
//!
//! Each scenario resets the counter set it is given, exercises one lifecycle path and
//! writes a human-readable account of the counters to `out`. The returned report carries
//! the same numbers for callers that want to check them.

pub mod construction;
pub mod transfer;
