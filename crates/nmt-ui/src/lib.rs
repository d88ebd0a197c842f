use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use nmt_config::Config;
use nmt_types::{AppEvent, TranslationEntry, UiEvent};
use tokio::sync::RwLock;
use tokio::sync::mpsc;

pub mod events;
pub mod render;
pub mod state;
pub mod terminal;

use self::events::UiAction;
use self::render::RenderContext;
use self::state::UiState;

/// Terminal frontend loop: renders the session projection and forwards user
/// interactions to the backend.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    entries: Vec<TranslationEntry>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (model_info, demo_mode, preview_chars) = {
        let config = config.read().await;
        (
            config.model.clone(),
            config.demo_mode,
            config.ui.sample_preview_chars,
        )
    };

    let samples: Vec<String> = entries.iter().map(|entry| entry.igala.clone()).collect();
    let mut state = UiState::new(samples);

    let _terminal_guard = terminal::TerminalGuard;
    let mut term = terminal::setup_terminal()?;

    // Crossterm events come in from a dedicated reader thread
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    terminal::spawn_event_reader(event_tx);

    let mut tick = tokio::time::interval(Duration::from_millis(100));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        let ctx = RenderContext {
            entries: &entries,
            model_info: &model_info,
            demo_mode,
            preview_chars,
        };
        term.draw(|f| render::render(f, &mut state, &ctx))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                let Some(event) = maybe_event else { break };
                if let Some(action) = events::handle_event(&mut state, &event) {
                    dispatch(&ui_to_app_tx, action).await?;
                }
                // Drain queued input before re-rendering so rapid key
                // presses are processed immediately
                while let Ok(event) = event_rx.try_recv() {
                    if let Some(action) = events::handle_event(&mut state, &event) {
                        dispatch(&ui_to_app_tx, action).await?;
                    }
                }
            }
            backend_event = app_to_ui_rx.recv() => {
                match backend_event {
                    Ok(AppEvent::ShowRender(model)) => {
                        state.translating = false;
                        state.render = Some(model);
                    }
                    Ok(_) => {}
                    Err(_) => break, // backend closed
                }
            }
            _ = tick.tick() => {}
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("UI loop stopped");
    Ok(())
}

async fn dispatch(ui_to_app_tx: &AsyncSender<AppEvent>, action: UiAction) -> anyhow::Result<()> {
    let event = match action {
        UiAction::Submit(text) => AppEvent::TranslateRequest(text),
        UiAction::PickSample(sentence) => AppEvent::SelectSample(sentence),
        UiAction::Quit => AppEvent::UiEvent(UiEvent::Close),
    };

    ui_to_app_tx.send(event).await?;
    Ok(())
}
