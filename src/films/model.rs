//! Upstream film records and the display shape derived from them.

use serde::{Deserialize, Serialize};

/// Film record as returned by the upstream API.
///
/// Only the fields the UI needs are read; anything else in the payload is
/// ignored. Missing or `null` fields are tolerated.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawFilmRecord {
    pub episode_id: Option<i64>,
    pub title: Option<String>,
    pub opening_crawl: Option<String>,
    pub release_date: Option<String>,
}

/// Envelope of the films endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmsResponse {
    pub results: Vec<RawFilmRecord>,
}

/// Four-field film shape consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFilm {
    pub id: i64,
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl From<RawFilmRecord> for DisplayFilm {
    fn from(raw: RawFilmRecord) -> Self {
        Self {
            id: raw.episode_id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            opening_text: raw.opening_crawl.unwrap_or_default(),
            release_date: raw.release_date.unwrap_or_default(),
        }
    }
}

/// Element-wise, order-preserving transform.
pub fn to_display_films(records: Vec<RawFilmRecord>) -> Vec<DisplayFilm> {
    records.into_iter().map(DisplayFilm::from).collect()
}
