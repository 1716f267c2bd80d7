use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the upstream film API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning `{ "results": [...] }` (default: swapi.dev films).
    #[serde(default = "default_films_url")]
    pub films_url: String,
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Fetch once automatically at startup (default: true).
    #[serde(default = "default_fetch_on_start")]
    pub fetch_on_start: bool,
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Drop "Fetch Movies" triggers while a fetch is in flight (default: false).
    #[serde(default)]
    pub ignore_fetch_while_loading: bool,
}

pub const DEFAULT_FILMS_URL: &str = "https://swapi.dev/api/films/";

fn default_films_url() -> String {
    DEFAULT_FILMS_URL.to_string()
}

fn default_fetch_on_start() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            films_url: default_films_url(),
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fetch_on_start: default_fetch_on_start(),
            tick_rate_ms: default_tick_rate_ms(),
            ignore_fetch_while_loading: false,
        }
    }
}
