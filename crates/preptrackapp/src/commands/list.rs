use crate::commands::{CmdMessage, CmdResult, ItemView};
use crate::error::{PrepError, Result};
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Restrict to one category id.
    pub category: Option<String>,
    /// Only items not yet completed.
    pub pending_only: bool,
}

pub fn run<S: ProgressStore>(tracker: &ProgressTracker<S>, filter: &ItemFilter) -> Result<CmdResult> {
    let categories = match &filter.category {
        Some(id) => {
            let category = tracker
                .catalog()
                .category(id)
                .ok_or_else(|| PrepError::CategoryNotFound(id.clone()))?;
            std::slice::from_ref(category)
        }
        None => tracker.categories(),
    };

    let items: Vec<ItemView> = categories
        .iter()
        .flat_map(|category| {
            category.items.iter().map(move |item| ItemView {
                item: item.clone(),
                category_name: category.name.clone(),
                completed: tracker.is_completed(item.id),
            })
        })
        .filter(|view| !(filter.pending_only && view.completed))
        .collect();

    let mut result = CmdResult::default();
    if items.is_empty() && filter.pending_only {
        result.add_message(CmdMessage::success("Nothing pending, everything is done."));
    }
    Ok(result.with_listed_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{small_catalog, tracker_with};

    #[test]
    fn lists_every_item_in_catalog_order() {
        let tracker = tracker_with(small_catalog());
        let result = run(&tracker, &ItemFilter::default()).unwrap();

        let ids: Vec<_> = result.listed_items.iter().map(|v| v.item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(result.listed_items[2].category_name, "Advanced");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn marks_completed_items() {
        let mut tracker = tracker_with(small_catalog());
        tracker.toggle_completion(2).unwrap();

        let result = run(&tracker, &ItemFilter::default()).unwrap();
        let flags: Vec<_> = result.listed_items.iter().map(|v| v.completed).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn filters_by_category() {
        let tracker = tracker_with(small_catalog());
        let filter = ItemFilter {
            category: Some("advanced".to_string()),
            ..Default::default()
        };
        let result = run(&tracker, &filter).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.title, "Third");
    }

    #[test]
    fn unknown_category_is_an_error() {
        let tracker = tracker_with(small_catalog());
        let filter = ItemFilter {
            category: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            run(&tracker, &filter),
            Err(PrepError::CategoryNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn pending_only_hides_completed() {
        let mut tracker = tracker_with(small_catalog());
        tracker.toggle_completion(1).unwrap();
        let filter = ItemFilter {
            pending_only: true,
            ..Default::default()
        };
        let result = run(&tracker, &filter).unwrap();
        let ids: Vec<_> = result.listed_items.iter().map(|v| v.item.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn pending_only_when_all_done_reports_it() {
        let mut tracker = tracker_with(small_catalog());
        for id in 1..=3 {
            tracker.toggle_completion(id).unwrap();
        }
        let filter = ItemFilter {
            pending_only: true,
            ..Default::default()
        };
        let result = run(&tracker, &filter).unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
