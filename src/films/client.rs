use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::films::error::FetchError;
use crate::films::model::{to_display_films, DisplayFilm, FilmsResponse, RawFilmRecord};

/// HTTP client for the films endpoint.
///
/// One GET per call. No retries; the only timeout is the optional one from
/// config.
#[derive(Debug, Clone)]
pub struct FilmsClient {
    client: Client,
    url: String,
}

impl FilmsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: config.films_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw `results` list.
    pub async fn fetch_films(&self) -> Result<Vec<RawFilmRecord>, FetchError> {
        info!(url = %self.url, "Fetching films");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "Films request failed to send");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Films request returned error status");
            return Err(FetchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: FilmsResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(url = %self.url, error = %e, "Films response is not valid JSON");
            FetchError::Decode(e)
        })?;

        debug!(count = parsed.results.len(), "Films response parsed");
        Ok(parsed.results)
    }

    /// Fetch and transform into display records.
    pub async fn fetch_display_films(&self) -> Result<Vec<DisplayFilm>, FetchError> {
        let records = self.fetch_films().await?;
        let films = to_display_films(records);
        info!(count = films.len(), "Films fetched");
        Ok(films)
    }
}
