use std::time::Duration;

use kanal::AsyncSender;
use nmt_core::session::Session;
use nmt_types::{AppEvent, TranslateSignal};

/// Handle a manual translate request from the text area.
///
/// The delay is a perceived-latency pause before revealing the outcome; it
/// never changes what the session commits.
pub async fn handle_translate_request(
    session: &mut Session,
    text: &str,
    delay: Duration,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match session.submit_manual_input(text) {
        TranslateSignal::Success { translation } => {
            tracing::info!(session = %session.id(), "translation complete: {}", translation);
        }
        TranslateSignal::NotFound => {
            tracing::info!(session = %session.id(), "sentence not in demo corpus");
        }
        TranslateSignal::MissingInput => {
            tracing::debug!(session = %session.id(), "empty translate request");
        }
    }

    app_to_ui_tx
        .send(AppEvent::ShowRender(session.render()))
        .await?;

    Ok(())
}
