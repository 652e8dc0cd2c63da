//! # API Facade
//!
//! The single entry point for UI clients. The facade:
//! - **Normalizes inputs**: item selectors arrive as strings and leave as ids
//! - **Dispatches** to the matching function in [`crate::commands`]
//! - **Returns structured types**: `Result<CmdResult>`, never formatted text
//!
//! Business rules live in the commands; output and prompts live in the UI.
//!
//! ## Selectors
//!
//! - **Single id**: `N` (e.g. `3`)
//! - **Range**: `Start-End`, inclusive (e.g. `1-4`). Start must be <= end.
//!
//! Several selectors can be given at once. The expanded ids are deduplicated
//! keeping first-seen order, so `2 1-3` resolves to `[2, 1, 3]`. Ids are then
//! checked against the catalog and an unknown id fails the whole call with
//! [`PrepError::ItemNotFound`].
//!
//! ## Generic Over ProgressStore
//!
//! `PrepApi<S: ProgressStore>` runs on `FsBackend` in production and `MemBackend`
//! in tests.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::{PrepError, Result};
use crate::export::ExportFormat;
use crate::model::ItemId;
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub struct PrepApi<S: ProgressStore> {
    tracker: ProgressTracker<S>,
    data_dir: PathBuf,
}

impl<S: ProgressStore> PrepApi<S> {
    pub fn new(tracker: ProgressTracker<S>, data_dir: PathBuf) -> Self {
        Self { tracker, data_dir }
    }

    pub fn tracker(&self) -> &ProgressTracker<S> {
        &self.tracker
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn list_items(&self, filter: &ItemFilter) -> Result<CmdResult> {
        commands::list::run(&self.tracker, filter)
    }

    pub fn toggle_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = parse_selectors(self.tracker.catalog(), selectors)?;
        commands::toggle::toggle(&mut self.tracker, &ids)
    }

    pub fn complete_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = parse_selectors(self.tracker.catalog(), selectors)?;
        commands::toggle::complete(&mut self.tracker, &ids)
    }

    pub fn reopen_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = parse_selectors(self.tracker.catalog(), selectors)?;
        commands::toggle::reopen(&mut self.tracker, &ids)
    }

    pub fn status(&self, category: Option<&str>) -> Result<CmdResult> {
        commands::status::run(&self.tracker, category)
    }

    pub fn export(&self, format: ExportFormat) -> Result<CmdResult> {
        commands::export::run(&self.tracker, format)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.tracker)
    }

    pub fn roadmap(&self) -> Result<CmdResult> {
        commands::roadmap::run(&self.tracker)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

/// Expands selectors into catalog ids, deduplicated in first-seen order.
///
/// Ranges are walked lazily and stop at the first id the catalog lacks.
fn parse_selectors<I: AsRef<str>>(catalog: &Catalog, inputs: &[I]) -> Result<Vec<ItemId>> {
    if inputs.is_empty() {
        return Err(PrepError::Api("No item ids given".to_string()));
    }

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for input in inputs {
        for id in parse_id_or_range(input.as_ref())? {
            if !catalog.contains_item(id) {
                return Err(PrepError::ItemNotFound(id));
            }
            if seen.insert(id) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

fn parse_id_or_range(s: &str) -> Result<RangeInclusive<ItemId>> {
    let s = s.trim();
    match s.split_once('-') {
        Some((start, end)) => {
            let start = parse_id(start)?;
            let end = parse_id(end)?;
            if start > end {
                return Err(PrepError::Api(format!(
                    "Invalid range {}: start is greater than end",
                    s
                )));
            }
            Ok(start..=end)
        }
        None => {
            let id = parse_id(s)?;
            Ok(id..=id)
        }
    }
}

fn parse_id(s: &str) -> Result<ItemId> {
    s.trim()
        .parse::<ItemId>()
        .map_err(|_| PrepError::Api(format!("Invalid item id: {:?}", s)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ItemFilter;
pub use crate::commands::{CmdMessage, CmdResult, ExportOutput, ItemChange, ItemView, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::tracker::DEFAULT_PROGRESS_KEY;

    fn api() -> PrepApi<MemBackend> {
        let tracker =
            ProgressTracker::open(Catalog::bundled(), MemBackend::new(), DEFAULT_PROGRESS_KEY);
        PrepApi::new(tracker, PathBuf::from("/nonexistent"))
    }

    fn parse(inputs: &[&str]) -> Result<Vec<ItemId>> {
        parse_selectors(&Catalog::bundled(), inputs)
    }

    #[test]
    fn test_parse_single_and_range() {
        assert_eq!(parse(&["3"]).unwrap(), vec![3]);
        assert_eq!(parse(&["1-4"]).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse(&["5-5"]).unwrap(), vec![5]);
    }

    #[test]
    fn test_parse_dedupes_in_order() {
        assert_eq!(parse(&["2", "1-3", "2"]).unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse(&["5-3"]).unwrap_err().to_string().contains("Invalid range"));
        assert!(parse(&["abc"]).is_err());
        assert!(parse(&["-3"]).is_err());
        assert!(parse(&["1-"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_huge_range_stops_at_first_unknown_id() {
        assert!(matches!(
            parse(&["1-4000000000"]),
            Err(PrepError::ItemNotFound(34))
        ));
        assert!(matches!(
            parse(&["4294967290-4294967295"]),
            Err(PrepError::ItemNotFound(4294967290))
        ));
    }

    #[test]
    fn test_toggle_huge_range_leaves_progress_untouched() {
        let mut api = api();
        assert!(matches!(
            api.toggle_items(&["1-4000000000"]),
            Err(PrepError::ItemNotFound(34))
        ));
        assert!(api.tracker().completed_items().is_empty());
    }

    #[test]
    fn test_toggle_via_selectors() {
        let mut api = api();
        let result = api.toggle_items(&["1-2", "4"]).unwrap();
        assert_eq!(result.changed_items.len(), 3);
        assert_eq!(api.tracker().completed_items(), vec![1, 2, 4]);
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut api = api();
        assert!(matches!(
            api.toggle_items(&["34"]),
            Err(PrepError::ItemNotFound(34))
        ));
        assert!(api.tracker().completed_items().is_empty());
    }

    #[test]
    fn test_complete_then_reopen() {
        let mut api = api();
        api.complete_items(&["10"]).unwrap();
        assert!(api.tracker().is_completed(10));
        api.reopen_items(&["10"]).unwrap();
        assert!(!api.tracker().is_completed(10));
    }

    #[test]
    fn test_reset_and_status() {
        let mut api = api();
        api.toggle_items(&["1-33"]).unwrap();
        assert!(api.status(None).unwrap().overall.unwrap().is_complete());

        api.reset().unwrap();
        let status = api.status(None).unwrap();
        assert_eq!(status.overall.unwrap().completed, 0);
        assert_eq!(status.category_progress.len(), 6);
    }
}
