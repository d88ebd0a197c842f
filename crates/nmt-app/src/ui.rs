use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use nmt_config::Config;
use nmt_core::table::TranslationTable;
use nmt_types::AppEvent;
use tokio::sync::RwLock;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    table: Arc<TranslationTable>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    nmt_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, table.entries().to_vec(), config).await
}
