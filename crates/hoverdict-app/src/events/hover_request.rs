use hoverdict_core::editor::Position;
use hoverdict_core::hover::{Hover, HoverProvider, HoverSource};

use crate::document::SpanDocument;
use crate::events::HoverRequest;

pub async fn handle_hover_request(provider: &HoverProvider, req: HoverRequest) -> Option<Hover> {
    tracing::debug!("Hover request at {} in '{}'", req.cursor, req.text);

    let doc = SpanDocument::new(req.text);
    let hover = provider
        .provide_hover(
            &doc,
            Position {
                line: 0,
                character: req.cursor,
            },
        )
        .await;

    if hover.is_none() {
        tracing::debug!("No entry resolved");
    }
    hover
}
