use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe, monotonically increasing event counter.
///
/// The value only moves up through [`Counter::increment`]; the single exception is
/// [`Counter::reset`], which is meant for separating independent runs.
#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Records one event.
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the counter value (most likely stale by the time it is observed by the
    /// caller if other threads are recording events).
    pub fn read(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Sets the counter back to 0.
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Counter").field(&self.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Counter::default().read(), 0);
    }

    #[test]
    fn test_increment() {
        let counter = Counter::default();
        counter.increment();
        assert_eq!(counter.read(), 1);
        counter.increment();
        assert_eq!(counter.read(), 2);
    }

    #[test]
    fn test_reset() {
        let counter = Counter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.read(), 2);
        counter.reset();
        assert_eq!(counter.read(), 0);
    }

    #[test]
    fn test_concurrent_increment() {
        let counter = Arc::new(Counter::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter_ref = counter.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counter_ref.increment();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(counter.read(), 8000);
    }
}
