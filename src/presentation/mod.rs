//! Presentation-logic infrastructure.
//!
//! Every screen embeds a [`PresentationCore`], implements [`Transform`]
//! and, when it shows a paged list, drives a [`PaginatedListEngine`].

pub mod core;
pub mod events;
pub mod list;
pub mod mvi;
pub mod navigation;
pub mod transform;

pub use self::core::{PageCursor, PresentationCore, FIRST_PAGE};
pub use events::{derive, event_channel, EventSink, EventStream};
pub use list::{ListInput, PaginatedListEngine, RefreshKind};
pub use navigation::{EventsMode, NavigationIntent, NotificationsMode, Scene};
pub use transform::Transform;
