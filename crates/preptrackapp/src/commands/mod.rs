//! # Command Layer
//!
//! Each command lives in its own submodule as a plain function over a
//! [`ProgressTracker`](crate::tracker::ProgressTracker). Commands hold the business
//! rules (id validation, filtering, message wording) and return a [`CmdResult`].
//!
//! Commands never print, prompt or pick exit codes. The CLI decides how a
//! `CmdResult` is rendered, and confirmation for destructive operations happens
//! before a command is called.
//!
//! ## Command Modules
//!
//! - [`list`]: catalog items with completion marks
//! - [`toggle`]: flip, complete or reopen items
//! - [`status`]: overall and per-category statistics
//! - [`export`]: JSON or Markdown snapshot
//! - [`reset`]: clear all progress
//! - [`roadmap`]: study phases with derived state
//! - [`config`]: resolved configuration and template

use crate::config::PrepConfig;
use crate::export::ExportFormat;
use crate::model::{CategoryProgress, ItemId, LearningItem, ProgressStats};
use crate::roadmap::PhaseProgress;
use serde::Serialize;

pub mod config;
pub mod export;
pub mod list;
pub mod reset;
pub mod roadmap;
pub mod status;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog item paired with its completion state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub item: LearningItem,
    pub category_name: String,
    pub completed: bool,
}

/// The result of changing one item's completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemChange {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
    /// False when the item was already in the requested state.
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    pub format: ExportFormat,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<ItemView>,
    pub changed_items: Vec<ItemChange>,
    pub overall: Option<ProgressStats>,
    pub category_progress: Vec<CategoryProgress>,
    pub phases: Vec<PhaseProgress>,
    pub export: Option<ExportOutput>,
    pub config: Option<PrepConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ItemView>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_overall(mut self, stats: ProgressStats) -> Self {
        self.overall = Some(stats);
        self
    }

    pub fn with_category_progress(mut self, progress: Vec<CategoryProgress>) -> Self {
        self.category_progress = progress;
        self
    }

    pub fn with_phases(mut self, phases: Vec<PhaseProgress>) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_export(mut self, export: ExportOutput) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_config(mut self, config: PrepConfig) -> Self {
        self.config = Some(config);
        self
    }
}
