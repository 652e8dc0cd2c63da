use crate::commands::CmdResult;
use crate::error::{PrepError, Result};
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;

/// Overall statistics plus per-category progress, optionally for one category.
pub fn run<S: ProgressStore>(tracker: &ProgressTracker<S>, category: Option<&str>) -> Result<CmdResult> {
    let categories = match category {
        Some(id) => vec![tracker
            .category_progress_for(id)
            .ok_or_else(|| PrepError::CategoryNotFound(id.to_string()))?],
        None => tracker.category_progress(),
    };

    Ok(CmdResult::default()
        .with_overall(tracker.overall_progress())
        .with_category_progress(categories))
}
