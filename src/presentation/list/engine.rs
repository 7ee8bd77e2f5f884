use std::future::Future;

use futures_core::future::BoxFuture;
use tokio::sync::{mpsc, watch};

use crate::activity::{BusyGuard, BusyTracker, FailureBroadcaster, OperationId};
use crate::error::TransportFailure;
use crate::presentation::core::{PageCursor, PresentationCore};
use crate::presentation::events::EventStream;
use crate::presentation::mvi::{Intent, Reducer, ScreenState};
use crate::teardown::TeardownHandle;

use super::intent::ListIntent;
use super::reducer::ListReducer;
use super::state::{ListState, RefreshKind};

pub type PageFuture<T> = BoxFuture<'static, Result<Vec<T>, TransportFailure>>;

/// Fetches one page of display items.
pub type PageFetcher<T> = Box<dyn Fn(u32) -> PageFuture<T> + Send + Sync>;

/// Gesture streams driving a list.
pub struct ListInput<T> {
    /// Fires on activation and on pull-to-refresh.
    pub header_refresh: EventStream<()>,
    /// Fires when the end of the list is reached.
    pub footer_refresh: EventStream<()>,
    pub selection: EventStream<T>,
}

/// A provider call settled, tagged with the trigger that issued it.
///
/// Holds the call's busy guards, so trackers only go idle once the loop
/// has applied (or discarded) the result.
struct Completion<T> {
    kind: RefreshKind,
    generation: u64,
    page: u32,
    result: Result<Vec<T>, TransportFailure>,
    _busy: [BusyGuard; 2],
}

/// Fetch/merge loop shared by every list screen.
///
/// All list state lives in the loop task: triggers, selections and
/// settled provider calls are queued onto it and applied one at a time.
/// Provider calls run as separate tasks tracked by the core's busy
/// trackers and failure broadcaster.
pub struct PaginatedListEngine<T> {
    name: &'static str,
    page: PageCursor,
    loading: BusyTracker,
    header_loading: BusyTracker,
    footer_loading: BusyTracker,
    failures: FailureBroadcaster,
    teardown: TeardownHandle,
    fetch: PageFetcher<T>,
    on_select: Box<dyn FnMut(T) + Send>,
    state: ListState<T>,
    items: watch::Sender<Vec<T>>,
}

impl<T> PaginatedListEngine<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new<F, Fut>(core: &PresentationCore, fetch: F) -> Self
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, TransportFailure>> + Send + 'static,
    {
        let (items, _) = watch::channel(Vec::new());
        Self {
            name: core.name(),
            page: core.page().clone(),
            loading: core.loading().clone(),
            header_loading: core.header_loading().clone(),
            footer_loading: core.footer_loading().clone(),
            failures: core.failures().clone(),
            teardown: core.teardown_handle(),
            fetch: Box::new(move |page| Box::pin(fetch(page))),
            on_select: Box::new(|_| {}),
            state: ListState::default(),
            items,
        }
    }

    /// Handle selected items, typically by emitting a navigation intent.
    pub fn on_select<F>(mut self, on_select: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        self.on_select = Box::new(on_select);
        self
    }

    pub fn items(&self) -> watch::Receiver<Vec<T>> {
        self.items.subscribe()
    }

    /// Spawn the loop. Returns the item list, replayed to new observers.
    ///
    /// The loop ends once every input stream is closed and no current
    /// call is pending, or when the owning screen is torn down.
    pub fn start(self, input: ListInput<T>) -> watch::Receiver<Vec<T>> {
        let items = self.items();
        let teardown = self.teardown.clone();
        teardown.spawn(self.run(input));
        items
    }

    async fn run(mut self, input: ListInput<T>) {
        let ListInput {
            mut header_refresh,
            mut footer_refresh,
            mut selection,
        } = input;
        let (done_tx, mut done_rx) = mpsc::unbounded_channel();
        let mut header_open = true;
        let mut footer_open = true;
        let mut selection_open = true;

        loop {
            tokio::select! {
                trigger = header_refresh.recv(), if header_open => match trigger {
                    Some(()) => self.request(RefreshKind::Header, &done_tx),
                    None => header_open = false,
                },
                trigger = footer_refresh.recv(), if footer_open => match trigger {
                    Some(()) => self.request(RefreshKind::Footer, &done_tx),
                    None => footer_open = false,
                },
                selected = selection.recv(), if selection_open => match selected {
                    Some(item) => (self.on_select)(item),
                    None => selection_open = false,
                },
                Some(completion) = done_rx.recv() => self.complete(completion),
                else => break,
            }

            if !header_open && !footer_open && !selection_open && !self.state.is_fetching() {
                break;
            }
        }
        tracing::debug!(list = self.name, "List engine stopped");
    }

    fn request(&mut self, kind: RefreshKind, done: &mpsc::UnboundedSender<Completion<T>>) {
        let page = match kind {
            RefreshKind::Header => self.page.reset(),
            RefreshKind::Footer => self.page.advance(),
        };
        self.dispatch(ListIntent::Requested { kind });
        let generation = self.state.pipeline(kind).generation();
        tracing::debug!(
            list = self.name,
            refresh = kind.as_str(),
            page,
            generation,
            "Fetching page"
        );

        let pipeline_loading = match kind {
            RefreshKind::Header => &self.header_loading,
            RefreshKind::Footer => &self.footer_loading,
        };
        let busy = [pipeline_loading.acquire(), self.loading.acquire()];
        let operation = OperationId::new(format!("{}.{}", self.name, kind.as_str()));
        let call = self.failures.track(operation, (self.fetch)(page));

        let done = done.clone();
        self.teardown.spawn(async move {
            let result = call.await;
            // Loop already gone: dropping the completion releases the guards.
            let _ = done.send(Completion {
                kind,
                generation,
                page,
                result,
                _busy: busy,
            });
        });
    }

    fn complete(&mut self, completion: Completion<T>) {
        let Completion {
            kind,
            generation,
            page,
            result,
            _busy,
        } = completion;

        if !self.state.pipeline(kind).is_current(generation) {
            tracing::trace!(
                list = self.name,
                refresh = kind.as_str(),
                page,
                generation,
                "Discarding superseded result"
            );
            return;
        }

        match result {
            Ok(items) => {
                tracing::debug!(
                    list = self.name,
                    refresh = kind.as_str(),
                    page,
                    count = items.len(),
                    "Page loaded"
                );
                self.dispatch(ListIntent::Loaded {
                    kind,
                    generation,
                    items,
                });
            }
            // Already published by the failure broadcaster.
            Err(_) => self.dispatch(ListIntent::Failed { kind, generation }),
        }
    }

    fn dispatch(&mut self, intent: ListIntent<T>) {
        let revision = self.state.revision();
        tracing::trace!(list = self.name, intent = intent.label(), "Reducing");
        self.state = ListReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state.revision() != revision {
            self.items.send_replace(self.state.items.clone());
        }
    }
}
