use hoverdict_core::editor::{HostDocument, Position, Range};

/// Single-line document over one selected span. The stdio host ships the
/// span directly, so the word range is always the whole text.
pub struct SpanDocument {
    text: String,
}

impl SpanDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl HostDocument for SpanDocument {
    fn word_range_at(&self, pos: Position) -> Option<Range> {
        if pos.line != 0 || self.text.is_empty() {
            return None;
        }

        Some(Range {
            start: Position { line: 0, character: 0 },
            end: Position {
                line: 0,
                character: self.text.chars().count() as u32,
            },
        })
    }

    fn text_in_range(&self, range: &Range) -> String {
        let start = range.start.character as usize;
        let end = range.end.character as usize;
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}
