//! # Catalog Store
//!
//! The catalog is the fixed, ordered curriculum: categories, each owning an ordered
//! list of learning items. It is built once at startup and is read-only afterwards;
//! there are no mutation operations.
//!
//! ## Sources
//!
//! - [`Catalog::bundled`]: the built-in interview-preparation curriculum.
//! - [`Catalog::load`]: a JSON file with the same shape as the `categories` field of
//!   the JSON export, selected through the `catalog_file` config setting.
//!
//! ## Validation
//!
//! Catalogs coming from outside the binary go through [`Catalog::from_categories`],
//! which rejects:
//! - duplicate category ids,
//! - item id `0` or duplicate item ids (across all categories),
//! - items whose `category` field does not name their parent category.
//!
//! ## Ordering
//!
//! [`Catalog::all_items`] yields items in (category order, item order). Every
//! consumer that needs a flat view uses it, so exports and listings agree on order.

use crate::error::{PrepError, Result};
use crate::model::{Category, ItemId, LearningItem};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

mod bundled;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The built-in curriculum.
    pub fn bundled() -> Self {
        Self {
            categories: bundled::categories(),
        }
    }

    /// Builds a catalog after checking its identity invariants.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// Loads a catalog from a JSON array of categories.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(PrepError::Io)?;
        let categories: Vec<Category> =
            serde_json::from_str(&content).map_err(PrepError::Serialization)?;
        tracing::debug!(path = %path.display(), count = categories.len(), "Loaded catalog file");
        Self::from_categories(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn all_items(&self) -> Vec<&LearningItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .collect()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&LearningItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == id)
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

fn validate(categories: &[Category]) -> Result<()> {
    let mut category_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for category in categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(PrepError::Catalog(format!(
                "duplicate category id '{}'",
                category.id
            )));
        }
        for item in &category.items {
            if item.id == 0 {
                return Err(PrepError::Catalog(format!(
                    "item '{}' has id 0; ids must be positive",
                    item.title
                )));
            }
            if !item_ids.insert(item.id) {
                return Err(PrepError::Catalog(format!("duplicate item id {}", item.id)));
            }
            if item.category != category.id {
                return Err(PrepError::Catalog(format!(
                    "item {} claims category '{}' but is listed under '{}'",
                    item.id, item.category, category.id
                )));
            }
        }
    }
    Ok(())
}
