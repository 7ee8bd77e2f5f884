use crate::presentation::mvi::Intent;

use super::state::RefreshKind;

#[derive(Debug)]
pub enum ListIntent<T> {
    /// A refresh trigger fired; a new provider call is about to start.
    Requested { kind: RefreshKind },

    /// A provider call settled with items.
    Loaded {
        kind: RefreshKind,
        generation: u64,
        items: Vec<T>,
    },

    /// A provider call failed. Items stay as they are.
    Failed { kind: RefreshKind, generation: u64 },
}

impl<T: Send + 'static> Intent for ListIntent<T> {
    fn label(&self) -> &'static str {
        match self {
            ListIntent::Requested { .. } => "requested",
            ListIntent::Loaded { .. } => "loaded",
            ListIntent::Failed { .. } => "failed",
        }
    }
}
