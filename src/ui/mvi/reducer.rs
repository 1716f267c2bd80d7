use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// `(State, Intent) -> State`, with no side effects. Network calls and
/// channel sends live in the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
