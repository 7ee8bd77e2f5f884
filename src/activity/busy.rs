use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use scopeguard::ScopeGuard;
use tokio::sync::watch;

/// Counts in-flight operations and publishes `count > 0`.
///
/// Clones share the same counter. The busy flag is a `watch` channel:
/// new observers immediately see the current value and only distinct
/// values are published.
#[derive(Clone)]
pub struct BusyTracker {
    inner: Arc<BusyInner>,
}

struct BusyInner {
    count: Mutex<usize>,
    busy: watch::Sender<bool>,
}

impl BusyTracker {
    pub fn new() -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            inner: Arc::new(BusyInner {
                count: Mutex::new(0),
                busy,
            }),
        }
    }

    pub fn count(&self) -> usize {
        *self.inner.count.lock()
    }

    pub fn is_busy(&self) -> bool {
        *self.inner.busy.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.busy.subscribe()
    }

    /// Wrap `operation` so the tracker counts it as in flight.
    ///
    /// The count is taken immediately and given back exactly once: when the
    /// operation finishes, or when the returned future is dropped before
    /// that (superseded, cancelled, never polled).
    pub fn track<F>(&self, operation: F) -> impl Future<Output = F::Output>
    where
        F: Future,
    {
        let guard = self.acquire();
        async move {
            let output = operation.await;
            drop(guard);
            output
        }
    }

    /// Count one operation as in flight until the guard is dropped.
    pub fn acquire(&self) -> BusyGuard {
        self.increment();
        BusyGuard {
            _release: scopeguard::guard(self.clone(), release as fn(BusyTracker)),
        }
    }

    fn increment(&self) {
        let mut count = self.inner.count.lock();
        *count += 1;
        self.publish(*count);
    }

    fn decrement(&self) {
        let mut count = self.inner.count.lock();
        match count.checked_sub(1) {
            Some(remaining) => *count = remaining,
            None => tracing::error!("BusyTracker released more often than acquired"),
        }
        self.publish(*count);
    }

    // Called with the count lock held so flag updates keep the count order.
    fn publish(&self, count: usize) {
        let busy = count > 0;
        self.inner.busy.send_if_modified(|current| {
            if *current == busy {
                return false;
            }
            *current = busy;
            true
        });
    }
}

fn release(tracker: BusyTracker) {
    tracker.decrement();
}

/// Keeps one operation counted by a [`BusyTracker`]. Releases on drop.
#[must_use = "the operation stops counting as busy when the guard is dropped"]
pub struct BusyGuard {
    _release: ScopeGuard<BusyTracker, fn(BusyTracker)>,
}

impl Default for BusyTracker {
    fn default() -> Self {
        Self::new()
    }
}
