use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use waypost_core::CoreEvent;

use crate::app::{App, StatusKind};
use crate::backend::ContactsBackend;
use crate::input::handle_key;
use crate::render::render;
use crate::ui::Tui;

pub async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    backend: &ContactsBackend,
    mut core_events: UnboundedReceiver<CoreEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));
    let mut core_events_open = true;

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        app.running = false;
                    }
                    None => app.running = false,
                }
            }

            event = core_events.recv(), if core_events_open => {
                match event {
                    Some(event) => app.handle_core_event(event),
                    None => core_events_open = false,
                }
            }

            _ = tick_interval.tick() => {
                app.expire_status();
            }
        }

        if let Some(user_ids) = app.pending_save.take() {
            save_close_friends(app, backend, user_ids).await;
        }
    }

    Ok(())
}

async fn save_close_friends(app: &mut App, backend: &ContactsBackend, user_ids: Vec<i64>) {
    match backend.save_close_friends(&user_ids).await {
        Ok(true) => {
            tracing::info!(count = user_ids.len(), target = %backend.describe(), "close friends saved");
            app.apply_saved_close_friends(&user_ids);
            app.set_status(
                StatusKind::Info,
                format!("Saved {} close friends", user_ids.len()),
            );
        }
        Ok(false) => {
            tracing::warn!("close friends save was not confirmed");
            app.set_status(StatusKind::Error, "Close friends were not saved");
        }
        Err(e) => {
            tracing::error!("Failed to save close friends: {:#}", e);
            app.set_status(StatusKind::Error, format!("Save failed: {}", e));
        }
    }
}
