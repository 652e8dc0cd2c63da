use crate::commands::{CmdResult, ExportOutput};
use crate::error::Result;
use crate::export::ExportFormat;
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;

/// Renders a progress snapshot. Writing it anywhere is the caller's job.
pub fn run<S: ProgressStore>(tracker: &ProgressTracker<S>, format: ExportFormat) -> Result<CmdResult> {
    let content = tracker.export_progress(format)?;
    tracing::debug!(%format, bytes = content.len(), "Rendered export");
    Ok(CmdResult::default().with_export(ExportOutput { format, content }))
}
