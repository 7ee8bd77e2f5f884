use std::marker::PhantomData;

use crate::presentation::mvi::Reducer;

use super::intent::ListIntent;
use super::state::{ListState, RefreshKind};

/// Reducer for paginated lists.
///
/// Header results replace the items, footer results append. Results from
/// a superseded call are ignored.
pub struct ListReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for ListReducer<T> {
    type State = ListState<T>;
    type Intent = ListIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Requested { kind } => {
                let pipeline = state.pipeline_mut(kind);
                *pipeline = pipeline.begin();
                state
            }

            ListIntent::Loaded {
                kind,
                generation,
                items,
            } => {
                if !state.pipeline(kind).is_current(generation) {
                    return state;
                }
                match kind {
                    RefreshKind::Header => state.items = items,
                    RefreshKind::Footer => state.items.extend(items),
                }
                state.revision += 1;
                let pipeline = state.pipeline_mut(kind);
                *pipeline = pipeline.settle();
                state
            }

            ListIntent::Failed { kind, generation } => {
                if state.pipeline(kind).is_current(generation) {
                    let pipeline = state.pipeline_mut(kind);
                    *pipeline = pipeline.settle();
                }
                state
            }
        }
    }
}
