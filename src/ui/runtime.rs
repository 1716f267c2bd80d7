use crate::config::Config;
use crate::films::FilmsClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rows;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{run_command_worker, COMMAND_BUFFER};
use ratatui::layout::Rect;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Run the interactive film browser until the user quits.
pub fn run(config: &Config, client: FilmsClient) -> io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let source = client.url().to_string();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    runtime.spawn(run_command_worker(
        command_rx,
        Arc::new(client),
        events.sender(),
    ));

    let mut app = App::new()
        .with_command_sender(command_tx)
        .with_fetch_guard(config.ui.ignore_fetch_while_loading);
    app.start(&config.ui);
    info!(url = %source, "UI started");

    loop {
        let size = terminal.size()?;
        app.set_viewport_rows(body_rows(Rect::new(0, 0, size.width, size.height)));
        terminal.draw(|frame| draw(frame, &app, &source))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::FilmsLoaded(result)) => app.on_films_loaded(result),
            // Redraw happens on the next loop iteration.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight fetches are abandoned, not awaited.
    runtime.shutdown_background();
    info!("UI stopped");
    Ok(())
}
