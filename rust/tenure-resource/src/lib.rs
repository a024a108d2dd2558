//! Move-only resource handles and the lifecycle counters they report to.
//!
//! A [`ResourceHandle`] exclusively owns a zero-initialized payload. It can be moved
//! the usual Rust way (`let b = a;`), which leaves nothing behind, or transferred with
//! [`ResourceHandle::take`] / [`ResourceHandle::assign_from`], which leave the source
//! alive as an empty *husk* until its own scope ends. Every construction and every
//! drop, husks included, is recorded in a [`LifecycleCounters`] instance.

pub mod counter;
pub mod counters;
pub mod handle;
pub mod named;

pub use counters::{CounterSnapshot, LifecycleCounters};
pub use handle::ResourceHandle;
pub use named::NamedResource;
