//! `NamedResource`: the capability shared by every resource kind.

/// A resource that can report its name.
///
/// This is the only capability the abstraction carries. Implementors are expected to be
/// move-only: they must not implement `Clone` or `Copy`, so a resource and its backing
/// storage can never exist in two places. Transfers that leave a husk behind are provided
/// by the concrete type (see [`ResourceHandle::take`](crate::ResourceHandle::take)).
///
/// ```compile_fail
/// use tenure_resource::{LifecycleCounters, ResourceHandle};
///
/// let counters = LifecycleCounters::new();
/// let a = ResourceHandle::with_counters("texture", 16, &counters).unwrap();
/// let b = a.clone();
/// ```
pub trait NamedResource {
    /// Current name of the resource; empty for a husk.
    fn name(&self) -> &str;
}
