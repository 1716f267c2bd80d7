pub mod cli;
pub mod config;
pub mod films;
pub mod headless;
pub mod logging;
pub mod ui;
