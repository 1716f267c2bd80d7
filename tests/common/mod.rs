//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use moviebrowser::config::ApiConfig;
use moviebrowser::films::{DisplayFilm, FilmsClient};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// A port nothing is listening on once this returns.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn client_for(url: &str) -> FilmsClient {
    let config = ApiConfig {
        films_url: url.to_string(),
        timeout_seconds: Some(5),
    };
    FilmsClient::new(&config).expect("Failed to build client")
}

pub fn film(id: i64, title: &str) -> DisplayFilm {
    DisplayFilm {
        id,
        title: title.to_string(),
        opening_text: String::new(),
        release_date: String::new(),
    }
}
