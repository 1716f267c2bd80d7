//! Film API access: fetch, decode, and transform into display records.

mod client;
mod error;
mod model;

pub use client::FilmsClient;
pub use error::{FetchError, REQUEST_FAILED_MESSAGE};
pub use model::{to_display_films, DisplayFilm, FilmsResponse, RawFilmRecord};
