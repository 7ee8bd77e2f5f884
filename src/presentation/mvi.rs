//! Intent/reducer/state split used by screen logic.
//!
//! ```text
//! trigger or settled call ──→ Intent ──→ Reducer ──→ State ──→ watch outputs
//! ```
//!
//! Reducers are pure. Everything asynchronous happens outside them and
//! comes back as an intent.

/// Input to a reducer.
pub trait Intent: Send + 'static {
    /// Short label for logs.
    fn label(&self) -> &'static str;
}

/// Value a reducer folds intents into.
pub trait ScreenState: Default + Send + 'static {
    /// Bumped by the reducer whenever observable content changes, so owners
    /// only republish when there is something new.
    fn revision(&self) -> u64;
}

pub trait Reducer {
    type State: ScreenState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
