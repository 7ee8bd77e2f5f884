//! State shared by the presentation logic of every screen.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use crate::activity::{BusyTracker, FailureBroadcaster};
use crate::config::ChannelConfig;
use crate::error::{DomainError, ErrorTranslator};
use crate::provider::SharedProvider;
use crate::teardown::{TeardownHandle, TeardownSignal};

pub const FIRST_PAGE: u32 = 1;

/// Page of the next list fetch.
///
/// `reset` and `advance` return the value the triggering fetch must use,
/// so the read can never interleave with another trigger's write.
#[derive(Debug, Clone)]
pub struct PageCursor {
    page: Arc<AtomicU32>,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page: Arc::new(AtomicU32::new(FIRST_PAGE)),
        }
    }

    pub fn current(&self) -> u32 {
        self.page.load(Ordering::SeqCst)
    }

    pub fn reset(&self) -> u32 {
        self.page.store(FIRST_PAGE, Ordering::SeqCst);
        FIRST_PAGE
    }

    pub fn advance(&self) -> u32 {
        self.page.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider handle, page cursor, busy trackers and failure channels of one
/// screen.
///
/// Screens embed a core and hand clones of its trackers to the tasks they
/// spawn. Construction starts the error translator subscription, so it
/// must happen inside a Tokio runtime. Dropping the core tears the screen
/// down: every task spawned through [`spawn`](Self::spawn) or tied to
/// [`teardown_handle`](Self::teardown_handle) stops.
pub struct PresentationCore {
    name: &'static str,
    provider: SharedProvider,
    page: PageCursor,
    loading: BusyTracker,
    header_loading: BusyTracker,
    footer_loading: BusyTracker,
    failures: FailureBroadcaster,
    parsed_errors: broadcast::Sender<DomainError>,
    teardown: TeardownSignal,
}

impl PresentationCore {
    pub fn new(name: &'static str, provider: SharedProvider) -> Self {
        Self::with_config(name, provider, &ChannelConfig::default())
    }

    pub fn with_config(name: &'static str, provider: SharedProvider, channels: &ChannelConfig) -> Self {
        let (parsed_errors, _) = broadcast::channel(channels.parsed_error_capacity.max(1));
        let core = Self {
            name,
            provider,
            page: PageCursor::new(),
            loading: BusyTracker::new(),
            header_loading: BusyTracker::new(),
            footer_loading: BusyTracker::new(),
            failures: FailureBroadcaster::new(channels.failure_capacity),
            parsed_errors,
            teardown: TeardownSignal::new(),
        };

        // Subscribe before spawning so no failure published right after
        // construction is missed.
        core.spawn(ErrorTranslator::run(
            core.failures.subscribe(),
            core.parsed_errors.clone(),
        ));
        core.spawn(log_parsed_errors(name, core.parsed_errors.subscribe()));

        tracing::debug!(screen = name, "Presentation core created");
        core
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn provider(&self) -> &SharedProvider {
        &self.provider
    }

    pub fn page(&self) -> &PageCursor {
        &self.page
    }

    /// Tracks every provider call of the screen.
    pub fn loading(&self) -> &BusyTracker {
        &self.loading
    }

    pub fn header_loading(&self) -> &BusyTracker {
        &self.header_loading
    }

    pub fn footer_loading(&self) -> &BusyTracker {
        &self.footer_loading
    }

    pub fn failures(&self) -> &FailureBroadcaster {
        &self.failures
    }

    /// Domain errors decoded from failures published after this call.
    pub fn parsed_errors(&self) -> broadcast::Receiver<DomainError> {
        self.parsed_errors.subscribe()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.teardown.handle()
    }

    /// Spawn a task owned by this screen.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.teardown.handle().spawn(task);
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_torn_down()
    }

    /// Stop every task owned by this screen. Idempotent.
    pub fn teardown(&self) {
        if self.teardown.signal() {
            tracing::debug!(screen = self.name, "Presentation core torn down");
        }
    }
}

impl Drop for PresentationCore {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn log_parsed_errors(screen: &'static str, mut errors: broadcast::Receiver<DomainError>) {
    loop {
        match errors.recv().await {
            Ok(error) => tracing::error!(screen, kind = %error.kind, "{}", error),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(screen, skipped, "Parsed error log lagged behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
