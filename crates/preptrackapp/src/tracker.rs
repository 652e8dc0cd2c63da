//! # Progress Tracker
//!
//! The tracker owns the only mutable state in the system: the set of completed item
//! ids. Everything else is either authored ([`Catalog`]) or derived on demand.
//!
//! ## Lifecycle
//!
//! 1. [`ProgressTracker::open`] reads the saved record once. A missing or corrupt
//!    record starts the tracker empty; it never fails.
//! 2. [`ProgressTracker::toggle_completion`] flips one id and writes the full set
//!    back before returning.
//! 3. [`ProgressTracker::reset_progress`] removes the record from storage and
//!    clears the set.
//!
//! ## Write Ordering
//!
//! Persistence is an explicit call at the end of each mutation. When a write
//! fails the mutation is undone and the error returned, so the in-memory set never
//! holds a state that storage does not.
//!
//! ## Unknown Ids
//!
//! The tracker accepts any id. Ids outside the catalog are stored and persisted
//! but never counted, because statistics only walk catalog items. Callers that
//! want validation do it before calling in (see [`crate::api`]).

use crate::catalog::Catalog;
use crate::error::Result;
use crate::export::{self, ExportFormat, ExportInput, ExportOptions};
use crate::model::{Category, CategoryProgress, ItemId, LearningItem, ProgressStats};
use crate::store::record;
use crate::store::ProgressStore;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Storage key used when the configuration does not name one.
pub const DEFAULT_PROGRESS_KEY: &str = "learning-progress";

pub struct ProgressTracker<S: ProgressStore> {
    catalog: Catalog,
    store: S,
    key: String,
    completed: BTreeSet<ItemId>,
    export_options: ExportOptions,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Creates a tracker, restoring the completed set saved under `key`.
    pub fn open(catalog: Catalog, store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let completed = record::load_completed(&store, &key);
        Self {
            catalog,
            store,
            key,
            completed,
            export_options: ExportOptions::default(),
        }
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    pub fn all_items(&self) -> Vec<&LearningItem> {
        self.catalog.all_items()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_completed(&self, id: ItemId) -> bool {
        self.completed.contains(&id)
    }

    /// The raw completed set, ascending. May include ids unknown to the catalog.
    pub fn completed_items(&self) -> Vec<ItemId> {
        self.completed.iter().copied().collect()
    }

    /// Flips the completion state of `id` and persists. Returns the new state.
    pub fn toggle_completion(&mut self, id: ItemId) -> Result<bool> {
        let now_completed = if self.completed.remove(&id) {
            false
        } else {
            self.completed.insert(id);
            true
        };

        if let Err(e) = record::save_completed(&self.store, &self.key, &self.completed) {
            // Undo the flip so memory matches what storage holds.
            if now_completed {
                self.completed.remove(&id);
            } else {
                self.completed.insert(id);
            }
            return Err(e);
        }

        tracing::debug!(id, completed = now_completed, "Toggled item");
        Ok(now_completed)
    }

    pub fn overall_progress(&self) -> ProgressStats {
        let items = self.catalog.all_items();
        let completed = items
            .iter()
            .filter(|item| self.completed.contains(&item.id))
            .count();
        ProgressStats::new(completed, items.len())
    }

    /// One entry per category, in catalog order.
    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        self.catalog
            .categories()
            .iter()
            .map(|category| self.progress_of(category))
            .collect()
    }

    pub fn category_progress_for(&self, category_id: &str) -> Option<CategoryProgress> {
        self.catalog
            .category(category_id)
            .map(|category| self.progress_of(category))
    }

    fn progress_of(&self, category: &Category) -> CategoryProgress {
        let completed = category
            .items
            .iter()
            .filter(|item| self.completed.contains(&item.id))
            .count();
        CategoryProgress {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            stats: ProgressStats::new(completed, category.items.len()),
        }
    }

    pub fn export_progress(&self, format: ExportFormat) -> Result<String> {
        self.export_progress_at(format, Utc::now())
    }

    /// Same as [`Self::export_progress`] with an explicit export timestamp.
    pub fn export_progress_at(&self, format: ExportFormat, now: DateTime<Utc>) -> Result<String> {
        let input = ExportInput {
            now,
            overall: self.overall_progress(),
            categories_progress: self.category_progress(),
            completed: self.completed_items(),
            categories: self.catalog.categories(),
        };
        match format {
            ExportFormat::Json => export::render_json(&input),
            ExportFormat::Markdown => Ok(export::render_markdown(&input, &self.export_options)),
        }
    }

    /// Clears all progress and erases the stored record.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.store.remove(&self.key)?;
        let cleared = self.completed.len();
        self.completed.clear();
        tracing::info!(key = %self.key, cleared, "Progress reset");
        Ok(())
    }
}
