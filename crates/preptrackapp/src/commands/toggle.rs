//! # Completion Commands
//!
//! - [`toggle`]: flips each item
//! - [`complete`]: marks items done, leaving finished ones alone
//! - [`reopen`]: marks items pending, leaving pending ones alone
//!
//! All three check every id against the catalog before changing anything, so a
//! bad id in a batch leaves progress untouched.

use crate::commands::{CmdMessage, CmdResult, ItemChange};
use crate::error::{PrepError, Result};
use crate::model::ItemId;
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Flip,
    Done,
    Pending,
}

pub fn toggle<S: ProgressStore>(tracker: &mut ProgressTracker<S>, ids: &[ItemId]) -> Result<CmdResult> {
    apply(tracker, ids, Target::Flip)
}

pub fn complete<S: ProgressStore>(
    tracker: &mut ProgressTracker<S>,
    ids: &[ItemId],
) -> Result<CmdResult> {
    apply(tracker, ids, Target::Done)
}

pub fn reopen<S: ProgressStore>(tracker: &mut ProgressTracker<S>, ids: &[ItemId]) -> Result<CmdResult> {
    apply(tracker, ids, Target::Pending)
}

fn apply<S: ProgressStore>(
    tracker: &mut ProgressTracker<S>,
    ids: &[ItemId],
    target: Target,
) -> Result<CmdResult> {
    let mut titled = Vec::with_capacity(ids.len());
    for &id in ids {
        let item = tracker
            .catalog()
            .item(id)
            .ok_or(PrepError::ItemNotFound(id))?;
        titled.push((id, item.title.clone()));
    }

    let mut result = CmdResult::default();
    for (id, title) in titled {
        let was_completed = tracker.is_completed(id);
        let wanted = match target {
            Target::Flip => !was_completed,
            Target::Done => true,
            Target::Pending => false,
        };

        if wanted == was_completed {
            let state = if was_completed { "done" } else { "pending" };
            result.add_message(CmdMessage::info(format!(
                "Item {} is already {}: {}",
                id, state, title
            )));
        } else {
            tracker.toggle_completion(id)?;
            let verb = if wanted { "Completed" } else { "Reopened" };
            result.add_message(CmdMessage::success(format!("{} ({}): {}", verb, id, title)));
        }

        result.changed_items.push(ItemChange {
            id,
            title,
            completed: wanted,
            changed: wanted != was_completed,
        });
    }

    Ok(result.with_overall(tracker.overall_progress()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::{small_catalog, tracker_with};

    #[test]
    fn toggle_flips_each_item() {
        let mut tracker = tracker_with(small_catalog());
        tracker.toggle_completion(1).unwrap();

        let result = toggle(&mut tracker, &[1, 2]).unwrap();

        assert!(!tracker.is_completed(1));
        assert!(tracker.is_completed(2));
        assert_eq!(result.changed_items.len(), 2);
        assert!(!result.changed_items[0].completed);
        assert!(result.changed_items[1].completed);
        assert!(result.messages[0].content.starts_with("Reopened (1)"));
        assert!(result.messages[1].content.starts_with("Completed (2)"));
        assert_eq!(result.overall.unwrap().completed, 1);
    }

    #[test]
    fn unknown_id_rejects_whole_batch() {
        let mut tracker = tracker_with(small_catalog());

        let result = toggle(&mut tracker, &[1, 42]);

        assert!(matches!(result, Err(PrepError::ItemNotFound(42))));
        assert!(!tracker.is_completed(1));
        assert_eq!(tracker.store().write_count(), 0);
    }

    #[test]
    fn complete_is_idempotent() {
        let mut tracker = tracker_with(small_catalog());
        complete(&mut tracker, &[3]).unwrap();
        let result = complete(&mut tracker, &[3]).unwrap();

        assert!(tracker.is_completed(3));
        assert!(!result.changed_items[0].changed);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(tracker.store().write_count(), 1);
    }

    #[test]
    fn reopen_only_touches_completed_items() {
        let mut tracker = tracker_with(small_catalog());
        tracker.toggle_completion(1).unwrap();

        let result = reopen(&mut tracker, &[1, 2]).unwrap();

        assert!(!tracker.is_completed(1));
        assert!(!tracker.is_completed(2));
        assert!(result.changed_items[0].changed);
        assert!(!result.changed_items[1].changed);
    }

    #[test]
    fn write_failure_propagates() {
        let mut tracker = tracker_with(small_catalog());
        tracker.store().set_simulate_write_error(true);

        assert!(toggle(&mut tracker, &[1]).is_err());
        assert!(!tracker.is_completed(1));
    }
}
