use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, HoverRequest};

/// Read one JSON hover request per stdin line and feed the event loop.
///
/// Malformed lines are logged and skipped. EOF ends the task, which drops
/// the sender and lets the event loop drain and finish.
pub async fn watch_stdin(
    cancel: CancellationToken,
    request_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracing::info!("Reading hover requests from stdin");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("stdin watcher stopping");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<HoverRequest>(line) {
                    Ok(req) => request_tx.send(AppEvent::HoverRequest(req)).await?,
                    Err(e) => tracing::warn!("Ignoring malformed request: {e}"),
                }
            }
        }
    }

    Ok(())
}
