use crate::config::UiConfig;
use crate::films::{DisplayFilm, FetchError};
use crate::ui::film_list;
use crate::ui::films::{FilmsIntent, FilmsReducer, FilmsViewState};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchFilms,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Film view state (MVI pattern).
    films: FilmsViewState,
    /// First visible line of the film list.
    scroll: usize,
    /// Rows of the list on screen; 0 until the first layout.
    viewport_rows: usize,
    command_sender: Option<UiCommandSender>,
    ignore_fetch_while_loading: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            films: FilmsViewState::default(),
            scroll: 0,
            viewport_rows: 0,
            command_sender: None,
            ignore_fetch_while_loading: false,
        }
    }

    pub fn with_command_sender(mut self, sender: UiCommandSender) -> Self {
        self.command_sender = Some(sender);
        self
    }

    /// When set, fetch triggers are dropped while a fetch is in flight.
    pub fn with_fetch_guard(mut self, enabled: bool) -> Self {
        self.ignore_fetch_while_loading = enabled;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn films(&self) -> &FilmsViewState {
        &self.films
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Kick off the startup fetch when `ui.fetch_on_start` is set.
    ///
    /// Returns whether a fetch command was sent.
    pub fn start(&mut self, ui: &UiConfig) -> bool {
        if !ui.fetch_on_start {
            debug!("Startup fetch disabled");
            return false;
        }
        self.request_fetch()
    }

    /// False while the in-flight guard would drop a fetch trigger.
    pub fn can_fetch(&self) -> bool {
        !(self.ignore_fetch_while_loading && self.films.is_loading)
    }

    /// "Fetch Movies".
    ///
    /// Loading is set before the command leaves the UI thread. Returns
    /// `false` when the trigger was dropped by the in-flight guard or the
    /// worker could not be reached.
    pub fn request_fetch(&mut self) -> bool {
        if !self.can_fetch() {
            debug!("Fetch already in flight, ignoring trigger");
            return false;
        }

        dispatch_mvi!(self, films, FilmsReducer, FilmsIntent::FetchStarted);

        let Some(sender) = &self.command_sender else {
            self.fail_fetch("Film worker is not running".to_string());
            return false;
        };

        match sender.try_send(UiCommand::FetchFilms) {
            Ok(()) => true,
            Err(err) => {
                self.fail_fetch(format!("Failed to start fetch: {}", err));
                false
            }
        }
    }

    pub fn on_films_loaded(&mut self, result: Result<Vec<DisplayFilm>, FetchError>) {
        match result {
            Ok(movies) => {
                info!(count = movies.len(), "Showing films");
                self.scroll = 0;
                dispatch_mvi!(
                    self,
                    films,
                    FilmsReducer,
                    FilmsIntent::FetchSucceeded { movies }
                );
            }
            Err(err) => self.fail_fetch(err.to_string()),
        }
    }

    fn fail_fetch(&mut self, message: String) {
        warn!(error = %message, "Fetch failed");
        dispatch_mvi!(self, films, FilmsReducer, FilmsIntent::FetchFailed { message });
    }

    /// Scroll up (towards the first film).
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll down, stopping once the last line reaches the bottom row.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    /// Record how many list rows fit on screen, re-clamping the scroll.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        film_list::line_count(&self.films.movies).saturating_sub(self.viewport_rows.max(1))
    }
}
