use crate::catalog::Catalog;
use crate::model::{Category, LearningItem};
use crate::store::mem_backend::MemBackend;
use crate::tracker::{ProgressTracker, DEFAULT_PROGRESS_KEY};

/// Two categories, three items: basics = [1 First, 2 Second], advanced = [3 Third].
pub fn small_catalog() -> Catalog {
    let category = |id: &str, name: &str, items: Vec<LearningItem>| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        icon: String::new(),
        color: String::new(),
        items,
    };

    Catalog::from_categories(vec![
        category(
            "basics",
            "Basics",
            vec![
                LearningItem::new(1, "First", "basics"),
                LearningItem::new(2, "Second", "basics"),
            ],
        ),
        category(
            "advanced",
            "Advanced",
            vec![LearningItem::new(3, "Third", "advanced")],
        ),
    ])
    .expect("small catalog is valid")
}

/// A tracker over `catalog` backed by a fresh in-memory store.
pub fn tracker_with(catalog: Catalog) -> ProgressTracker<MemBackend> {
    ProgressTracker::open(catalog, MemBackend::new(), DEFAULT_PROGRESS_KEY)
}
