//! # Domain Model: Curriculum and Derived Progress
//!
//! This module defines the data structures shared by every layer: the authored
//! curriculum ([`Category`], [`LearningItem`]) and the statistics derived from it
//! ([`ProgressStats`], [`CategoryProgress`], [`ProgressTier`]).
//!
//! ## Authored vs Derived
//!
//! Categories and items are authored data. They are built once at startup (see
//! [`crate::catalog`]) and never change while the process runs. Item ids are
//! assigned by hand when the curriculum is written and must stay stable, since the
//! persisted progress record refers to them.
//!
//! Statistics are never stored. Every read recomputes them from the catalog and the
//! completed set, so there is nothing to invalidate.
//!
//! ## Percentages
//!
//! A percentage is `round(completed / total * 100)`, rounding halves up, and is `0`
//! whenever `total` is `0`. It is computed in integer arithmetic so the result is
//! always an exact value in `0..=100`.
//!
//! ## Wire Names
//!
//! All types serialize with camelCase keys (`categoryId`, `estimatedHours`), which
//! is the shape of the JSON export document.

use serde::{Deserialize, Serialize};

/// Stable identifier of a learning item.
pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    pub id: ItemId,
    pub title: String,
    /// Id of the owning [`Category`].
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl LearningItem {
    pub fn new(id: ItemId, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            description: None,
            priority: None,
            estimated_hours: None,
            resources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub items: Vec<LearningItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

impl ProgressStats {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    pub fn is_complete(&self) -> bool {
        self.percentage == 100
    }

    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percentage(self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category_id: String,
    pub category_name: String,
    #[serde(flatten)]
    pub stats: ProgressStats,
}

/// Coarse label for a completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ProgressTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => ProgressTier::Excellent,
            70..=89 => ProgressTier::Good,
            40..=69 => ProgressTier::Fair,
            _ => ProgressTier::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressTier::Excellent => "excellent",
            ProgressTier::Good => "good",
            ProgressTier::Fair => "fair",
            ProgressTier::Poor => "needs work",
        }
    }
}

/// Rounds `completed / total * 100` half-up; `0` for an empty total.
fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((completed * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(ProgressStats::new(1, 33).percentage, 3);
        assert_eq!(ProgressStats::new(1, 2).percentage, 50);
        assert_eq!(ProgressStats::new(1, 8).percentage, 13); // 12.5
        assert_eq!(ProgressStats::new(2, 3).percentage, 67);
        assert_eq!(ProgressStats::new(1, 3).percentage, 33);
    }

    #[test]
    fn test_percentage_empty_total_is_zero() {
        let stats = ProgressStats::new(0, 0);
        assert_eq!(stats.percentage, 0);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(ProgressStats::new(0, 5).percentage, 0);
        assert_eq!(ProgressStats::new(5, 5).percentage, 100);
        for total in 1..50 {
            for completed in 0..=total {
                let p = ProgressStats::new(completed, total).percentage;
                assert!(p <= 100);
                assert_eq!(p == 0, completed * 200 < total);
            }
        }
    }

    #[test]
    fn test_remaining() {
        assert_eq!(ProgressStats::new(3, 10).remaining(), 7);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(ProgressTier::from_percentage(0), ProgressTier::Poor);
        assert_eq!(ProgressTier::from_percentage(39), ProgressTier::Poor);
        assert_eq!(ProgressTier::from_percentage(40), ProgressTier::Fair);
        assert_eq!(ProgressTier::from_percentage(70), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percentage(89), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percentage(90), ProgressTier::Excellent);
        assert_eq!(ProgressTier::from_percentage(100), ProgressTier::Excellent);
    }

    #[test]
    fn test_category_progress_serializes_flat_camel_case() {
        let cp = CategoryProgress {
            category_id: "tree".into(),
            category_name: "Trees".into(),
            stats: ProgressStats::new(1, 5),
        };
        let value = serde_json::to_value(&cp).unwrap();
        assert_eq!(value["categoryId"], "tree");
        assert_eq!(value["categoryName"], "Trees");
        assert_eq!(value["completed"], 1);
        assert_eq!(value["total"], 5);
        assert_eq!(value["percentage"], 20);
    }

    #[test]
    fn test_item_optional_fields_are_omitted() {
        let item = LearningItem::new(7, "Linked list", "datastructure");
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("description").is_none());
        assert!(value.get("resources").is_none());
        assert_eq!(value["category"], "datastructure");
    }
}
