use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use nmt_core::session::Session;
use nmt_core::table::TranslationTable;
use nmt_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod select_sample;
pub mod translate_request;

use select_sample::handle_select_sample;
use translate_request::handle_translate_request;

/// App's main loop: one session, events handled to completion in order.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    table: Arc<TranslationTable>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let result_delay = {
        let config = state.config.read().await;
        Duration::from_millis(config.result_delay_ms)
    };

    let mut session = Session::new(table);

    tracing::info!(session = %session.id(), "event loop started, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break, // UI side closed
            },
        };

        tracing::debug!(
            "event received: {:?}",
            std::mem::discriminant(&event)
        );
        match event {
            AppEvent::ConfigChanged => {}
            AppEvent::UiEvent(UiEvent::Close) => break,
            AppEvent::ShowRender(_) => {
                // UI-only event, ignore in backend
            }
            AppEvent::TranslateRequest(text) => {
                handle_translate_request(&mut session, &text, result_delay, &app_to_ui_tx).await?;
            }
            AppEvent::SelectSample(sentence) => {
                handle_select_sample(&mut session, &sentence, &app_to_ui_tx).await?;
            }
        }
    }

    tracing::info!(session = %session.id(), "event loop stopped");
    Ok(())
}
