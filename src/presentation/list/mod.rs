//! Paginated list screens.
//!
//! - `state.rs` - items plus one generation-tagged pipeline per refresh kind
//! - `intent.rs` - refresh requested, page loaded, page failed
//! - `reducer.rs` - replace on header, append on footer, drop stale results
//! - `engine.rs` - event loop wiring triggers, provider calls and trackers

mod engine;
mod intent;
mod reducer;
mod state;

pub use engine::{ListInput, PageFetcher, PageFuture, PaginatedListEngine};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListState, Pipeline, PipelinePhase, RefreshKind};
