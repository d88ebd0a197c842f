use kanal::AsyncSender;
use nmt_core::session::Session;
use nmt_types::AppEvent;

/// Handle a sample sentence picked from the corpus list. Samples skip the
/// artificial delay: the original reveals them on the next rerun.
pub async fn handle_select_sample(
    session: &mut Session,
    sentence: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.select_sample(sentence);
    tracing::debug!(session = %session.id(), "sample selected");

    app_to_ui_tx
        .send(AppEvent::ShowRender(session.render()))
        .await?;

    Ok(())
}
