use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::editor::{HostDocument, Position};
use crate::format::format_doc;
use crate::resolve::candidates;
use crate::store::DictStore;

#[derive(Debug, Clone, Serialize)]
pub struct Hover {
    pub contents: MarkupContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupKind {
    Markdown,
    PlainText,
}

/// Hover content provider the host registers for all file types.
///
/// Holds a populated store; activation builds the store before constructing
/// the provider, so lookups never race initialization.
pub struct HoverProvider {
    store: Arc<DictStore>,
}

impl HoverProvider {
    pub fn new(store: Arc<DictStore>) -> Self {
        Self { store }
    }

    /// Resolve a selected span and cursor offset to hover content.
    ///
    /// Candidates are probed in resolution order; the first store hit wins
    /// and is rendered under its original-cased form. No hit means no
    /// content, which is the expected outcome for most spans.
    pub fn hover_for_span(&self, raw: &str, cursor: usize) -> Option<Hover> {
        for candidate in candidates(raw, cursor) {
            if let Some(rec) = self.store.lookup(&candidate.key) {
                tracing::debug!("Resolved '{}' via key '{}'", candidate.display, candidate.key);
                let lines = format_doc(&candidate.display, rec);
                return Some(Hover {
                    contents: MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: lines.join("\n"),
                    },
                });
            }
        }
        None
    }
}

/// Async seam the host calls per hover request.
#[async_trait]
pub trait HoverSource: Send + Sync {
    async fn provide_hover(&self, doc: &dyn HostDocument, pos: Position) -> Option<Hover>;
}

#[async_trait]
impl HoverSource for HoverProvider {
    async fn provide_hover(&self, doc: &dyn HostDocument, pos: Position) -> Option<Hover> {
        let range = doc.word_range_at(pos)?;
        let raw = doc.text_in_range(&range);
        if raw.is_empty() {
            return None;
        }

        let cursor = pos.character.saturating_sub(range.start.character) as usize;
        self.hover_for_span(&raw, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Range;

    fn store_with(lines: &[&str]) -> Arc<DictStore> {
        let mut store = DictStore::new();
        store.extend_from_lines(lines.iter().copied());
        Arc::new(store)
    }

    #[test]
    fn exact_match_wins_over_later_stages() {
        let provider = HoverProvider::new(store_with(&[
            "cat,kæt,a feline,猫,n.",
            "c,siː,third letter,C,n.",
        ]));

        let hover = provider.hover_for_span("cat", 1).expect("should resolve");
        assert!(hover.contents.value.starts_with("_cat_"));
        assert_eq!(hover.contents.kind, MarkupKind::Markdown);
    }

    #[test]
    fn camel_span_falls_through_to_phrase() {
        let provider = HoverProvider::new(store_with(&["hello world,,greeting,你好世界,int."]));

        let hover = provider
            .hover_for_span("helloWorld", 0)
            .expect("phrase should resolve");
        // the header shows the delimiter-normalized span, original casing
        assert!(hover.contents.value.starts_with("_hello World_"));
    }

    #[test]
    fn camel_span_falls_through_to_cursor_segment() {
        let provider = HoverProvider::new(store_with(&["world,wɜːld,the earth,世界,n."]));

        let hover = provider
            .hover_for_span("helloWorld", 7)
            .expect("segment should resolve");
        assert!(hover.contents.value.starts_with("_World_"));
    }

    #[test]
    fn miss_produces_no_content() {
        let provider = HoverProvider::new(store_with(&["cat,kæt,a feline,猫,n."]));

        assert!(provider.hover_for_span("dog", 0).is_none());
        assert!(provider.hover_for_span("", 0).is_none());
        assert!(provider.hover_for_span("-_-", 1).is_none());
    }

    #[test]
    fn uppercase_span_resolves_through_case_fold() {
        let provider = HoverProvider::new(store_with(&["cat,kæt,a feline,猫,n."]));

        let hover = provider.hover_for_span("CAT", 1).expect("should resolve");
        // display keeps the casing under the cursor
        assert!(hover.contents.value.starts_with("_CAT_"));
    }

    struct OneWordDoc {
        text: String,
    }

    impl HostDocument for OneWordDoc {
        fn word_range_at(&self, pos: Position) -> Option<Range> {
            (pos.line == 0 && !self.text.is_empty()).then(|| Range {
                start: Position { line: 0, character: 4 },
                end: Position {
                    line: 0,
                    character: 4 + self.text.chars().count() as u32,
                },
            })
        }

        fn text_in_range(&self, _range: &Range) -> String {
            self.text.clone()
        }
    }

    #[tokio::test]
    async fn provide_hover_maps_position_into_span_offset() {
        let provider = HoverProvider::new(store_with(&["world,wɜːld,the earth,世界,n."]));
        let doc = OneWordDoc {
            text: "helloWorld".to_string(),
        };

        // character 11 sits inside "World" once the range start is removed
        let hover = provider
            .provide_hover(&doc, Position { line: 0, character: 11 })
            .await
            .expect("should resolve");
        assert!(hover.contents.value.starts_with("_World_"));
    }

    #[tokio::test]
    async fn provide_hover_without_word_range_is_none() {
        let provider = HoverProvider::new(store_with(&["cat,kæt,a feline,猫,n."]));
        let doc = OneWordDoc {
            text: String::new(),
        };

        let hover = provider
            .provide_hover(&doc, Position { line: 0, character: 0 })
            .await;
        assert!(hover.is_none());
    }
}
