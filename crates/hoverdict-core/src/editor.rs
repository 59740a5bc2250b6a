//! Seams toward the host editor. The host implements these; this crate only
//! consumes them, so no editor-specific code lives anywhere in the workspace.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Document access the hover flow needs from the host.
pub trait HostDocument: Send + Sync {
    /// The word-like range containing the position, if any.
    fn word_range_at(&self, pos: Position) -> Option<Range>;

    /// Text inside a range previously returned by `word_range_at`.
    fn text_in_range(&self, range: &Range) -> String;
}

/// Transient progress surface, shown while the dataset downloads.
pub trait StatusIndicator: Send + Sync {
    fn show(&self, text: &str);
    fn hide(&self);
}
