//! Async side of the UI: runs fetch commands against the films client and
//! posts results back as UI events.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::films::FilmsClient;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker command channel.
pub const COMMAND_BUFFER: usize = 16;

/// Process UI commands until the sender side is dropped.
///
/// Each fetch runs in its own task, so a trigger issued while another fetch
/// is in flight starts a second request. Results are posted in completion
/// order; the last one to arrive is what the UI ends up showing.
pub async fn run_command_worker(
    mut commands: mpsc::Receiver<UiCommand>,
    client: Arc<FilmsClient>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchFilms => {
                let client = Arc::clone(&client);
                let events = events.clone();
                tokio::spawn(async move {
                    let result = client.fetch_display_films().await;
                    if events.send(AppEvent::FilmsLoaded(result)).is_err() {
                        debug!("UI event channel closed, dropping fetch result");
                    }
                });
            }
        }
    }
    debug!("Command channel closed, worker exiting");
}
