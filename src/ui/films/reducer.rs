use crate::ui::mvi::Reducer;

use super::intent::FilmsIntent;
use super::state::FilmsViewState;

/// Reducer for the film view.
///
/// Any state accepts any intent: there is no terminal state, and a fetch
/// may be re-triggered from idle, loaded, failed, or even loading.
pub struct FilmsReducer;

impl Reducer for FilmsReducer {
    type State = FilmsViewState;
    type Intent = FilmsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilmsIntent::FetchStarted => FilmsViewState {
                is_loading: true,
                error: None,
                ..state
            },
            FilmsIntent::FetchSucceeded { movies } => FilmsViewState {
                movies,
                is_loading: false,
                error: None,
            },
            // Movies from an earlier success are kept.
            FilmsIntent::FetchFailed { message } => FilmsViewState {
                is_loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}
