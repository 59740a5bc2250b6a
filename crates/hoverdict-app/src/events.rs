use std::sync::Arc;

use kanal::AsyncReceiver;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use hoverdict_core::hover::HoverProvider;

use crate::state::AppState;

pub mod hover_request;

use self::hover_request::handle_hover_request;

#[derive(Debug, Clone)]
pub enum AppEvent {
    HoverRequest(HoverRequest),
}

/// One request line from the host: the selected span and the cursor offset
/// within it, in characters.
#[derive(Debug, Clone, Deserialize)]
pub struct HoverRequest {
    pub text: String,
    #[serde(default)]
    pub cursor: u32,
}

/// App's main loop: one JSON response line per hover request, `null` when
/// nothing resolves.
pub async fn event_loop(
    state: Arc<AppState>,
    request_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let provider = HoverProvider::new(Arc::clone(&state.store));

    {
        let config = state.config.read().await;
        tracing::info!(
            "Serving lookups from {}",
            config.dataset.dataset_path().display()
        );
    }

    let mut stdout = tokio::io::stdout();
    loop {
        let Ok(event) = request_rx.recv().await else {
            tracing::debug!("Request channel closed");
            break;
        };

        match event {
            AppEvent::HoverRequest(req) => {
                let response = handle_hover_request(&provider, req).await;
                let line = serde_json::to_string(&response)?;
                stdout.write_all(line.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
    }

    Ok(())
}
