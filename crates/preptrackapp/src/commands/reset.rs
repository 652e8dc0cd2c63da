use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;

/// Clears every completion. Callers confirm with the user first.
pub fn run<S: ProgressStore>(tracker: &mut ProgressTracker<S>) -> Result<CmdResult> {
    let cleared = tracker.completed_items().len();
    tracker.reset_progress()?;

    let mut result = CmdResult::default().with_overall(tracker.overall_progress());
    result.add_message(CmdMessage::success(format!(
        "Progress reset ({} item{} cleared)",
        cleared,
        if cleared == 1 { "" } else { "s" }
    )));
    Ok(result)
}
