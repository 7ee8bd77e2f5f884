use std::fmt;
use std::future::Future;

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::TransportFailure;

/// Identity of one tracked operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationId {
    pub id: Uuid,
    pub name: String,
}

impl OperationId {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id.simple())
    }
}

/// A failure as seen by failure observers.
#[derive(Debug, Clone)]
pub struct TrackedFailure {
    pub operation: OperationId,
    pub failure: TransportFailure,
}

/// Republishes operation failures on a multicast channel.
///
/// Publishing never waits for observers: the channel is a bounded ring and
/// slow observers lag instead of blocking the operation.
#[derive(Clone)]
pub struct FailureBroadcaster {
    sender: broadcast::Sender<TrackedFailure>,
}

impl FailureBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TrackedFailure> {
        self.sender.subscribe()
    }

    /// Publish a failure. Returns how many observers it reached.
    pub fn publish(&self, tracked: TrackedFailure) -> usize {
        tracing::debug!(
            operation = %tracked.operation,
            kind = tracked.failure.kind(),
            "Operation failed: {}",
            tracked.failure
        );
        self.sender.send(tracked).unwrap_or(0)
    }

    /// Wrap `call` so its failure is also published.
    ///
    /// The caller still receives the identical result.
    pub fn track<F, T>(
        &self,
        operation: OperationId,
        call: F,
    ) -> impl Future<Output = Result<T, TransportFailure>>
    where
        F: Future<Output = Result<T, TransportFailure>>,
    {
        let broadcaster = self.clone();
        async move {
            let result = call.await;
            if let Err(failure) = &result {
                broadcaster.publish(TrackedFailure {
                    operation,
                    failure: failure.clone(),
                });
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_is_not_published() {
        let broadcaster = FailureBroadcaster::new(4);
        let mut failures = broadcaster.subscribe();

        let result = broadcaster
            .track(OperationId::new("ok"), async { Ok::<_, TransportFailure>(3) })
            .await;

        assert_eq!(result, Ok(3));
        assert!(failures.try_recv().is_err());
    }

    #[tokio::test]
    async fn failure_reaches_caller_and_every_observer() {
        let broadcaster = FailureBroadcaster::new(4);
        let mut first = broadcaster.subscribe();
        let mut second = broadcaster.subscribe();
        let failure = TransportFailure::Network("offline".to_string());

        let expected = failure.clone();
        let result: Result<(), _> = broadcaster
            .track(OperationId::new("users"), async move { Err(expected) })
            .await;

        assert_eq!(result, Err(failure.clone()));
        let a = first.try_recv().expect("first observer");
        let b = second.try_recv().expect("second observer");
        assert_eq!(a.failure, failure);
        assert_eq!(a.operation, b.operation);
        assert_eq!(a.operation.name, "users");
    }

    #[tokio::test]
    async fn failure_without_observers_is_still_returned() {
        let broadcaster = FailureBroadcaster::new(1);
        let result: Result<(), _> = broadcaster
            .track(OperationId::new("lonely"), async {
                Err(TransportFailure::Timeout { seconds: 1 })
            })
            .await;
        assert_eq!(result, Err(TransportFailure::Timeout { seconds: 1 }));
    }

    #[tokio::test]
    async fn slow_observer_lags_instead_of_blocking() {
        let broadcaster = FailureBroadcaster::new(1);
        let mut slow = broadcaster.subscribe();

        for _ in 0..3 {
            let _: Result<(), _> = broadcaster
                .track(OperationId::new("burst"), async {
                    Err(TransportFailure::Protocol("bad".to_string()))
                })
                .await;
        }

        assert!(matches!(
            slow.try_recv(),
            Err(broadcast::error::TryRecvError::Lagged(2))
        ));
        assert!(slow.try_recv().is_ok());
    }
}
