//! State for the film list view.

use crate::films::DisplayFilm;
use crate::ui::mvi::UiState;

pub const EMPTY_PLACEHOLDER: &str = "Found no movies.";
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Everything the film view renders from.
///
/// `movies` and `error` may both be set: a failed refresh keeps the films
/// from the last successful fetch in storage, but they are not displayed
/// while the error is. See [`FilmsViewState::content`] for precedence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilmsViewState {
    pub movies: Vec<DisplayFilm>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Fetch lifecycle derived from the stored fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing fetched yet.
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// The one view that is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewContent<'a> {
    Placeholder,
    Loading,
    Error(&'a str),
    List(&'a [DisplayFilm]),
}

impl UiState for FilmsViewState {}

impl FilmsViewState {
    pub fn phase(&self) -> FetchPhase {
        if self.is_loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if !self.movies.is_empty() {
            FetchPhase::Loaded
        } else {
            FetchPhase::Idle
        }
    }

    /// Loading beats error, error beats a (possibly stale) list, and the
    /// placeholder shows when there is nothing else.
    pub fn content(&self) -> ViewContent<'_> {
        if self.is_loading {
            ViewContent::Loading
        } else if let Some(error) = &self.error {
            ViewContent::Error(error)
        } else if !self.movies.is_empty() {
            ViewContent::List(&self.movies)
        } else {
            ViewContent::Placeholder
        }
    }
}
