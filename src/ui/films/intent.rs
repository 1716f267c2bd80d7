use crate::films::DisplayFilm;
use crate::ui::mvi::Intent;

/// Transitions of the film view.
#[derive(Debug, Clone)]
pub enum FilmsIntent {
    /// "Fetch Movies" triggered. Dispatched before the request is sent.
    FetchStarted,
    FetchSucceeded { movies: Vec<DisplayFilm> },
    /// Fetch failed; `message` is shown as-is.
    FetchFailed { message: String },
}

impl Intent for FilmsIntent {}
