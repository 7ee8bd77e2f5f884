//! Navigation intents emitted by screens.
//!
//! A [`NavigationIntent`] asks the glue to build and show the presentation
//! logic for a [`Scene`]. The provider handle travels along so the next
//! screen shares it.

use std::fmt;

use crate::model::{Repository, User};
use crate::provider::SharedProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum EventsMode {
    User(User),
    Repository(Repository),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationsMode {
    Mine,
    Repository(Repository),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Search,
    Events { mode: EventsMode },
    Notifications { mode: NotificationsMode },
    Settings,
    Login,
    UserDetails { user: User },
}

#[derive(Clone)]
pub struct NavigationIntent {
    pub scene: Scene,
    pub provider: SharedProvider,
}

impl NavigationIntent {
    pub fn new(scene: Scene, provider: &SharedProvider) -> Self {
        Self {
            scene,
            provider: SharedProvider::clone(provider),
        }
    }
}

impl fmt::Debug for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationIntent")
            .field("scene", &self.scene)
            .finish_non_exhaustive()
    }
}
