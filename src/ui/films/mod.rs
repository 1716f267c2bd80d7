mod intent;
mod reducer;
mod state;

pub use intent::FilmsIntent;
pub use reducer::FilmsReducer;
pub use state::{FetchPhase, FilmsViewState, ViewContent, EMPTY_PLACEHOLDER, LOADING_PLACEHOLDER};
