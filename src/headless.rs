//! Non-interactive mode: one fetch through the same view state machine,
//! written to stdout.

use crate::films::{DisplayFilm, FilmsClient};
use crate::ui::films::{
    FilmsIntent, FilmsReducer, FilmsViewState, ViewContent, EMPTY_PLACEHOLDER,
};
use crate::ui::mvi::Reducer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run one start → fetch → result cycle.
pub async fn fetch_once(client: &FilmsClient) -> FilmsViewState {
    let state = FilmsReducer::reduce(FilmsViewState::default(), FilmsIntent::FetchStarted);
    let intent = match client.fetch_display_films().await {
        Ok(movies) => FilmsIntent::FetchSucceeded { movies },
        Err(err) => FilmsIntent::FetchFailed {
            message: err.to_string(),
        },
    };
    FilmsReducer::reduce(state, intent)
}

/// Render what the UI would show for `state`.
///
/// `Err` carries the error text when the view is the error view.
pub fn render(state: &FilmsViewState, format: OutputFormat) -> Result<String, String> {
    match state.content() {
        ViewContent::Error(error) => Err(error.to_string()),
        ViewContent::Loading => Err("fetch did not complete".to_string()),
        ViewContent::Placeholder => Ok(match format {
            OutputFormat::Text => format!("{}\n", EMPTY_PLACEHOLDER),
            OutputFormat::Json => "[]\n".to_string(),
        }),
        ViewContent::List(films) => match format {
            OutputFormat::Text => Ok(render_text(films)),
            OutputFormat::Json => serde_json::to_string_pretty(films)
                .map(|json| format!("{json}\n"))
                .map_err(|e| e.to_string()),
        },
    }
}

fn render_text(films: &[DisplayFilm]) -> String {
    let mut out = String::new();
    for film in films {
        out.push_str(&format!(
            "Episode {}: {} ({})\n",
            film.id, film.title, film.release_date
        ));
        for line in film.opening_text.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(id: i64, title: &str) -> DisplayFilm {
        DisplayFilm {
            id,
            title: title.to_string(),
            opening_text: "Turmoil has engulfed\r\nthe Galactic Republic.".to_string(),
            release_date: "1999-05-19".to_string(),
        }
    }

    #[test]
    fn empty_state_renders_placeholder() {
        let state = FilmsViewState::default();
        assert_eq!(
            render(&state, OutputFormat::Text).unwrap(),
            "Found no movies.\n"
        );
        assert_eq!(render(&state, OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn error_state_is_err() {
        let state = FilmsViewState {
            movies: vec![film(1, "stale")],
            is_loading: false,
            error: Some("Request failed".to_string()),
        };
        assert_eq!(
            render(&state, OutputFormat::Text),
            Err("Request failed".to_string())
        );
    }

    #[test]
    fn text_lists_each_film_with_crawl() {
        let state = FilmsViewState {
            movies: vec![film(1, "The Phantom Menace")],
            is_loading: false,
            error: None,
        };
        let out = render(&state, OutputFormat::Text).unwrap();
        assert!(out.starts_with("Episode 1: The Phantom Menace (1999-05-19)\n"));
        assert!(out.contains("    Turmoil has engulfed\n    the Galactic Republic.\n"));
    }

    #[test]
    fn json_uses_display_keys() {
        let state = FilmsViewState {
            movies: vec![film(1, "The Phantom Menace")],
            is_loading: false,
            error: None,
        };
        let out = render(&state, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["title"], "The Phantom Menace");
        assert_eq!(value[0]["releaseDate"], "1999-05-19");
        assert!(value[0]["openingText"].is_string());
    }
}
