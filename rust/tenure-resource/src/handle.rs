//! `ResourceHandle`: a named, sized owner of a zero-initialized payload.

use std::sync::Arc;

use tenure_common::{Error, Result, hash::hash_name, result::verify_size};

use crate::{LifecycleCounters, NamedResource};

/// Exclusive owner of a named payload.
///
/// A handle is constructed once, may hand its contents over to another handle any number
/// of times, and is dropped exactly once. Construction and drop are counted in the
/// [`LifecycleCounters`] the handle was created against and traced through `log` at
/// `info` level:
///
/// ```text
/// Constructed: <name> (id: <identity hash>)
/// Destructed: <name>
/// ```
///
/// Two kinds of move are supported:
///
/// * A plain Rust move (`let b = a;`) relocates the handle. `a` ceases to exist, no
///   counter changes and nothing is traced.
/// * [`take`](Self::take) and [`assign_from`](Self::assign_from) transfer the contents out
///   of a handle that stays alive. The source becomes a *husk*: empty name, empty payload,
///   identity hash 0. A husk is still a handle and is counted when it is dropped.
///
/// The type implements neither `Clone` nor `Copy`.
pub struct ResourceHandle {
    name: String,
    payload: Vec<i32>,
    identity_hash: u64,
    counters: Arc<LifecycleCounters>,
}

impl ResourceHandle {
    /// Constructs a handle reporting to the process-wide counters.
    ///
    /// Fails with [`ErrorKind::InvalidSize`](tenure_common::ErrorKind::InvalidSize) when
    /// `size` is negative or the payload cannot be allocated; nothing is counted or traced
    /// in that case.
    pub fn new(name: impl Into<String>, size: i64) -> Result<ResourceHandle> {
        Self::with_counters(name, size, LifecycleCounters::global())
    }

    /// Constructs a handle reporting to `counters`.
    pub fn with_counters(
        name: impl Into<String>,
        size: i64,
        counters: &Arc<LifecycleCounters>,
    ) -> Result<ResourceHandle> {
        let name = name.into();
        let payload = zeroed_payload(&name, size)?;
        let identity_hash = hash_name(&name);
        let handle = ResourceHandle {
            name,
            payload,
            identity_hash,
            counters: counters.clone(),
        };
        counters.record_construction();
        log::info!(
            "Constructed: {} (id: {})",
            handle.name,
            handle.identity_hash
        );
        Ok(handle)
    }

    /// Moves the contents of `self` into a new handle, leaving `self` as a husk.
    ///
    /// This is not a construction: the counters are left untouched and no trace is
    /// emitted. Taking from a husk returns another husk.
    pub fn take(&mut self) -> ResourceHandle {
        ResourceHandle {
            name: std::mem::take(&mut self.name),
            payload: std::mem::take(&mut self.payload),
            identity_hash: std::mem::replace(&mut self.identity_hash, 0),
            counters: self.counters.clone(),
        }
    }

    /// Replaces the contents of `self` with those of `source`, leaving `source` as a husk.
    ///
    /// The previous contents of `self` are released without a destruction trace; only the
    /// end of a handle's scope counts as a destruction. Assigning a handle from itself
    /// cannot be expressed, the borrow checker rejects the aliasing:
    ///
    /// ```compile_fail
    /// use tenure_resource::{LifecycleCounters, ResourceHandle};
    ///
    /// let counters = LifecycleCounters::new();
    /// let mut a = ResourceHandle::with_counters("texture", 16, &counters).unwrap();
    /// a.assign_from(&mut a);
    /// ```
    pub fn assign_from(&mut self, source: &mut ResourceHandle) {
        self.name = std::mem::take(&mut source.name);
        self.payload = std::mem::take(&mut source.payload);
        self.identity_hash = std::mem::replace(&mut source.identity_hash, 0);
        log::debug!("Reassigned: {}", self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity_hash(&self) -> u64 {
        self.identity_hash
    }

    pub fn payload_size(&self) -> usize {
        self.payload.len()
    }

    pub fn payload(&self) -> &[i32] {
        &self.payload
    }

    /// Whether the contents of this handle have been transferred out.
    ///
    /// A handle constructed with an empty name and size 0 hashes to a non-zero value and
    /// is therefore not a husk.
    pub fn is_husk(&self) -> bool {
        self.identity_hash == 0 && self.name.is_empty() && self.payload.is_empty()
    }

    pub fn counters(&self) -> &Arc<LifecycleCounters> {
        &self.counters
    }

    /// Total constructions recorded in the process-wide counters.
    pub fn total_constructed() -> u64 {
        LifecycleCounters::global().total_constructed()
    }

    /// Total destructions recorded in the process-wide counters.
    pub fn total_destructed() -> u64 {
        LifecycleCounters::global().total_destructed()
    }

    /// Resets the process-wide counters. See [`LifecycleCounters::reset`].
    pub fn reset_counters() {
        LifecycleCounters::global().reset();
    }
}

fn zeroed_payload(name: &str, size: i64) -> Result<Vec<i32>> {
    let len = verify_size::<i32>(name, size)?;
    let mut payload = Vec::new();
    payload
        .try_reserve_exact(len)
        .map_err(|_| Error::invalid_size(name, size))?;
    payload.resize(len, 0);
    Ok(payload)
}

impl NamedResource for ResourceHandle {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        self.counters.record_destruction();
        log::info!("Destructed: {}", self.name);
    }
}

impl std::fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("name", &self.name)
            .field("identity_hash", &self.identity_hash)
            .field("payload_size", &self.payload.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use log::Level;
    use tenure_testkit::TraceCapture;

    use super::*;

    fn handle(name: &str, size: i64, counters: &Arc<LifecycleCounters>) -> ResourceHandle {
        ResourceHandle::with_counters(name, size, counters).unwrap()
    }

    #[test]
    fn test_construct() {
        let counters = LifecycleCounters::new();
        let h = handle("texture1", 1000, &counters);
        assert_eq!(h.name(), "texture1");
        assert_eq!(h.payload_size(), 1000);
        assert!(h.payload().iter().all(|&v| v == 0));
        assert_eq!(h.identity_hash(), hash_name("texture1"));
        assert!(!h.is_husk());
        assert!(Arc::ptr_eq(h.counters(), &counters));
    }

    #[test]
    fn test_construction_counting() {
        let counters = LifecycleCounters::new();
        let handles: Vec<_> = (0..5)
            .map(|i| handle(&format!("r{i}"), i, &counters))
            .collect();
        assert_eq!(counters.total_constructed(), 5);
        assert_eq!(counters.total_destructed(), 0);
        drop(handles);
        assert_eq!(counters.total_destructed(), 5);
    }

    #[test]
    fn test_scope_exit_counts_destruction() {
        let counters = LifecycleCounters::new();
        {
            let _h = handle("texture1", 1000, &counters);
            assert_eq!(counters.total_constructed(), 1);
            assert_eq!(counters.total_destructed(), 0);
        }
        assert_eq!(counters.total_destructed(), 1);
    }

    #[test]
    fn test_take_empties_source() {
        let counters = LifecycleCounters::new();
        let mut r1 = handle("texture2", 1000, &counters);
        let hash = r1.identity_hash();

        let r2 = r1.take();
        assert_eq!(r2.name(), "texture2");
        assert_eq!(r2.payload_size(), 1000);
        assert_eq!(r2.identity_hash(), hash);
        assert_eq!(r1.name(), "");
        assert_eq!(r1.identity_hash(), 0);
        assert_eq!(r1.payload_size(), 0);
        assert!(r1.is_husk());
        assert_eq!(counters.total_constructed(), 1);
        assert_eq!(counters.total_destructed(), 0);
    }

    #[test]
    fn test_husk_drop_is_counted() {
        let counters = LifecycleCounters::new();
        let mut r1 = handle("texture2", 10, &counters);
        let r2 = r1.take();
        drop(r1);
        assert_eq!(counters.total_destructed(), 1);
        drop(r2);
        assert_eq!(counters.total_destructed(), 2);
        assert_eq!(counters.total_constructed(), 1);
    }

    #[test]
    fn test_take_from_husk_yields_husk() {
        let counters = LifecycleCounters::new();
        let mut r1 = handle("a", 3, &counters);
        let _r2 = r1.take();
        let r3 = r1.take();
        assert!(r3.is_husk());
        assert!(r1.is_husk());
        assert_eq!(counters.total_constructed(), 1);
    }

    #[test]
    fn test_native_move_is_not_counted() {
        let counters = LifecycleCounters::new();
        let r1 = handle("native", 4, &counters);
        let r2 = r1;
        assert_eq!(r2.name(), "native");
        assert_eq!(counters.snapshot().live(), 1);
        drop(r2);
        assert_eq!(counters.total_constructed(), 1);
        assert_eq!(counters.total_destructed(), 1);
        assert_eq!(counters.live(), 0);
    }

    #[test]
    fn test_assign_from() {
        let counters = LifecycleCounters::new();
        let mut target = handle("old", 5, &counters);
        let mut source = handle("new", 7, &counters);
        let source_hash = source.identity_hash();

        target.assign_from(&mut source);
        assert_eq!(target.name(), "new");
        assert_eq!(target.payload_size(), 7);
        assert_eq!(target.identity_hash(), source_hash);
        assert!(source.is_husk());
        assert_eq!(counters.total_constructed(), 2);
        assert_eq!(counters.total_destructed(), 0);
    }

    #[test]
    fn test_assign_from_husk_leaves_both_consistent() {
        let counters = LifecycleCounters::new();
        let mut a = handle("a", 5, &counters);
        let mut b = a.take();
        // Round trip the contents back through the husk.
        a.assign_from(&mut b);
        b.assign_from(&mut a);
        a.assign_from(&mut b);
        assert_eq!(a.name(), "a");
        assert_eq!(a.payload_size(), 5);
        assert_eq!(a.identity_hash(), hash_name("a"));
        assert!(b.is_husk());
        assert_eq!(counters.total_constructed(), 1);
        assert_eq!(counters.total_destructed(), 0);
    }

    #[test]
    fn test_zero_size() {
        let counters = LifecycleCounters::new();
        let h = handle("empty", 0, &counters);
        assert_eq!(h.payload_size(), 0);
        assert!(!h.is_husk());
        assert_eq!(counters.total_constructed(), 1);
    }

    #[test]
    fn test_negative_size_fails_without_counting() {
        let counters = LifecycleCounters::new();
        let err = ResourceHandle::with_counters("bad", -1, &counters).unwrap_err();
        assert!(err.is_invalid_size());
        assert_eq!(counters.total_constructed(), 0);
        assert_eq!(counters.total_destructed(), 0);
    }

    #[test]
    fn test_oversized_payload_fails_without_counting() {
        let counters = LifecycleCounters::new();
        let err = ResourceHandle::with_counters("huge", i64::MAX, &counters).unwrap_err();
        assert!(err.is_invalid_size());

        // Fits in a layout on 64-bit targets but not in any real address space.
        let err = ResourceHandle::with_counters("huge", i64::MAX / 8, &counters).unwrap_err();
        assert!(err.is_invalid_size());

        assert_eq!(counters.snapshot(), crate::CounterSnapshot::default());
    }

    #[test]
    fn test_named_resource() {
        let counters = LifecycleCounters::new();
        let mut h = handle("named", 1, &counters);
        let resource: &dyn NamedResource = &h;
        assert_eq!(resource.name(), "named");
        let _moved = h.take();
        assert_eq!(NamedResource::name(&h), "");
    }

    #[test]
    fn test_debug_omits_payload() {
        let counters = LifecycleCounters::new();
        let h = handle("dbg", 3, &counters);
        let text = format!("{h:?}");
        assert!(text.contains("\"dbg\""));
        assert!(text.contains("payload_size: 3"));
    }

    #[test]
    fn test_traces() {
        let capture = TraceCapture::install();
        capture.clear();
        let counters = LifecycleCounters::new();

        let mut r1 = handle("traced", 8, &counters);
        let hash = r1.identity_hash();
        let r2 = r1.take();
        assert_eq!(
            capture.messages_at(Level::Info),
            vec![format!("Constructed: traced (id: {hash})")]
        );

        drop(r2);
        drop(r1);
        assert_eq!(
            capture.messages_at(Level::Info),
            vec![
                format!("Constructed: traced (id: {hash})"),
                "Destructed: traced".to_string(),
                "Destructed: ".to_string(),
            ]
        );
    }

    #[test]
    fn test_assign_from_emits_no_destruction_trace() {
        let capture = TraceCapture::install();
        capture.clear();
        let counters = LifecycleCounters::new();

        let mut target = handle("old", 1, &counters);
        let mut source = handle("new", 1, &counters);
        capture.clear();

        target.assign_from(&mut source);
        assert!(capture.messages_at(Level::Info).is_empty());
        assert_eq!(capture.messages_at(Level::Debug), vec!["Reassigned: new"]);
    }

    #[test]
    fn test_failed_construction_is_not_traced() {
        let capture = TraceCapture::install();
        capture.clear();
        let counters = LifecycleCounters::new();
        assert!(ResourceHandle::with_counters("bad", -3, &counters).is_err());
        assert!(capture.records().is_empty());
    }
}
