//! Event streams exchanged between glue and screen logic.
//!
//! Gesture and intent streams are unbounded queues so emitting never
//! blocks the glue. State streams are `watch` channels that replay their
//! current value to new observers.

use tokio::sync::{mpsc, watch};

use crate::teardown::TeardownHandle;

pub type EventStream<T> = mpsc::UnboundedReceiver<T>;
pub type EventSink<T> = mpsc::UnboundedSender<T>;

pub fn event_channel<T>() -> (EventSink<T>, EventStream<T>) {
    mpsc::unbounded_channel()
}

/// Keep a value derived from `source` up to date.
///
/// The derived channel starts with `map` applied to the current source
/// value and only publishes distinct values afterwards.
pub fn derive<S, D, F>(
    teardown: &TeardownHandle,
    mut source: watch::Receiver<S>,
    map: F,
) -> watch::Receiver<D>
where
    S: Send + Sync + 'static,
    D: PartialEq + Send + Sync + 'static,
    F: Fn(&S) -> D + Send + 'static,
{
    let initial = map(&source.borrow_and_update());
    let (sender, receiver) = watch::channel(initial);
    teardown.spawn(async move {
        while source.changed().await.is_ok() {
            let value = map(&source.borrow_and_update());
            sender.send_if_modified(|current| {
                if *current == value {
                    return false;
                }
                *current = value;
                true
            });
        }
    });
    receiver
}
