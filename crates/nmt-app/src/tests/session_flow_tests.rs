//! End-to-end event loop tests over real kanal channels.

use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use nmt_config::Config;
use nmt_core::table::TranslationTable;
use nmt_types::{AppEvent, RenderModel, TranslateStatus, TranslationEntry, UiEvent};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

fn entry(igala: &str, english: &str) -> TranslationEntry {
    TranslationEntry {
        igala: igala.to_string(),
        english: english.to_string(),
    }
}

fn demo_table() -> Arc<TranslationTable> {
    let entries = vec![
        entry("Ugane ki do̩mo̩ le̩", "Let there be light"),
        entry("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀", "Amono is a farmer's child"),
    ];
    Arc::new(TranslationTable::from_entries(entries).unwrap())
}

struct TestHarness {
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    task: JoinHandle<anyhow::Result<()>>,
}

fn spawn_event_loop() -> TestHarness {
    let mut config = Config::new();
    config.result_delay_ms = 0; // no UX delay in tests

    let state = Arc::new(AppState::new(config));
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(16);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(16);
    let cancel = CancellationToken::new();

    let task = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        demo_table(),
        cancel.clone(),
    ));

    TestHarness {
        ui_to_app_tx,
        app_to_ui_rx,
        cancel,
        task,
    }
}

async fn recv_render(rx: &AsyncReceiver<AppEvent>) -> RenderModel {
    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(AppEvent::ShowRender(model))) => model,
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout waiting for render"),
    }
}

#[tokio::test]
async fn translate_request_hit() {
    let harness = spawn_event_loop();

    harness
        .ui_to_app_tx
        .send(AppEvent::TranslateRequest("Ugane ki do̩mo̩ le̩".to_string()))
        .await
        .unwrap();

    let model = recv_render(&harness.app_to_ui_rx).await;
    assert_eq!(model.status, TranslateStatus::Success);
    assert_eq!(model.input_text, "Ugane ki do̩mo̩ le̩");
    assert_eq!(model.result_text.as_deref(), Some("Let there be light"));
    assert_eq!(model.input_token_count, 4);
    assert_eq!(model.output_token_count, 4);

    harness
        .ui_to_app_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();
    timeout(Duration::from_secs(2), harness.task)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn translate_request_miss_keeps_previous_input() {
    let harness = spawn_event_loop();

    harness
        .ui_to_app_tx
        .send(AppEvent::SelectSample("Ugane ki do̩mo̩ le̩".to_string()))
        .await
        .unwrap();
    let model = recv_render(&harness.app_to_ui_rx).await;
    assert_eq!(model.status, TranslateStatus::Success);

    harness
        .ui_to_app_tx
        .send(AppEvent::TranslateRequest("hello world".to_string()))
        .await
        .unwrap();
    let model = recv_render(&harness.app_to_ui_rx).await;
    assert_eq!(model.status, TranslateStatus::NotFound);
    assert!(model.result_text.is_none());
    assert_eq!(model.input_text, "Ugane ki do̩mo̩ le̩");
}

#[tokio::test]
async fn empty_translate_request() {
    let harness = spawn_event_loop();

    harness
        .ui_to_app_tx
        .send(AppEvent::TranslateRequest("   ".to_string()))
        .await
        .unwrap();

    let model = recv_render(&harness.app_to_ui_rx).await;
    assert_eq!(model.status, TranslateStatus::Empty);
    assert!(model.result_text.is_none());
    assert_eq!(model.output_token_count, 0);
}

#[tokio::test]
async fn select_sample_succeeds() {
    let harness = spawn_event_loop();

    harness
        .ui_to_app_tx
        .send(AppEvent::SelectSample("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀".to_string()))
        .await
        .unwrap();

    let model = recv_render(&harness.app_to_ui_rx).await;
    assert_eq!(model.status, TranslateStatus::Success);
    assert_eq!(model.input_text, "Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀");
    assert_eq!(
        model.result_text.as_deref(),
        Some("Amono is a farmer's child")
    );
}

#[tokio::test]
async fn cancellation_stops_event_loop() {
    let harness = spawn_event_loop();

    harness.cancel.cancel();

    timeout(Duration::from_secs(2), harness.task)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn uses_configured_delay_before_revealing() {
    let mut config = Config::new();
    config.result_delay_ms = 100;

    let state = Arc::new(AppState::new(config));
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(16);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(16);
    let cancel = CancellationToken::new();
    tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        demo_table(),
        cancel,
    ));

    let start = std::time::Instant::now();
    ui_to_app_tx
        .send(AppEvent::TranslateRequest("Ugane ki do̩mo̩ le̩".to_string()))
        .await
        .unwrap();
    let model = recv_render(&app_to_ui_rx).await;

    assert!(start.elapsed() >= Duration::from_millis(100));
    // the delay is cosmetic, the content is unaffected
    assert_eq!(model.result_text.as_deref(), Some("Let there be light"));
}
