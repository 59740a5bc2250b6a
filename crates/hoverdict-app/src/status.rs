use hoverdict_core::editor::StatusIndicator;

/// Status surface backed by the log stream. A real editor host shows a
/// transient status bar item here instead.
pub struct LogStatus;

impl StatusIndicator for LogStatus {
    fn show(&self, text: &str) {
        tracing::info!("{text}");
    }

    fn hide(&self) {}
}
