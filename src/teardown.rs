//! Screen teardown signalling.
//!
//! Every task spawned on behalf of a screen (translator subscription,
//! derived-output forwarders, list engine loops, in-flight fetches) races
//! against a [`TeardownHandle`] and stops once the owning screen is torn down.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct TeardownSignal {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownSignal {
    pub fn new() -> Self {
        Self {
            torn_down: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal teardown. Only the first call wakes waiters.
    pub fn signal(&self) -> bool {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
            return true;
        }
        false
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with spawned tasks
    pub fn handle(&self) -> TeardownHandle {
        TeardownHandle {
            torn_down: Arc::clone(&self.torn_down),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for TeardownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for observing teardown
#[derive(Clone)]
pub struct TeardownHandle {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownHandle {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register with Notify before reading the flag, otherwise a signal
        // landing between the check and the await is lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_torn_down() {
            return;
        }
        notified.await;
    }

    /// Run `task` until it finishes or teardown is signalled, whichever
    /// comes first. Returns `None` when teardown won.
    pub async fn guard<F>(&self, task: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            output = task => Some(output),
            _ = self.wait() => None,
        }
    }

    /// Spawn `task` onto the runtime, cancelled on teardown.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = self.clone();
        tokio::spawn(async move {
            handle.guard(task).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn wait_returns_immediately_after_signal() {
        let signal = TeardownSignal::new();
        let handle = signal.handle();
        assert!(signal.signal());
        assert!(!signal.signal());
        tokio::time::timeout(Duration::from_millis(100), handle.wait())
            .await
            .expect("wait should not block after teardown");
    }

    #[tokio::test]
    async fn guard_cancels_pending_task() {
        let signal = TeardownSignal::new();
        let handle = signal.handle();
        let pending = handle.guard(std::future::pending::<()>());
        tokio::pin!(pending);

        tokio::select! {
            _ = &mut pending => panic!("pending task finished before teardown"),
            _ = tokio::time::sleep(Duration::from_millis(10)) => {}
        }

        signal.signal();
        assert_eq!(pending.await, None);
    }

    #[tokio::test]
    async fn guard_returns_output_when_task_wins() {
        let signal = TeardownSignal::new();
        assert_eq!(signal.handle().guard(async { 7 }).await, Some(7));
    }
}
