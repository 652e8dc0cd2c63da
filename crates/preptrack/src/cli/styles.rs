//! Terminal styles for preptrack.
//!
//! Code refers to styles by meaning (`done`, `muted`, `tier_good`) rather than by
//! color. All styles are built once through `once_cell::sync::Lazy`.
//!
//! Whether ANSI codes are emitted is decided per call: rendering functions take a
//! `use_color` flag, resolved from [`console::colors_enabled`] in production and
//! forced off in tests.

use console::Style;
use once_cell::sync::Lazy;
use preptrackapp::model::ProgressTier;
use preptrackapp::roadmap::PhaseState;

pub struct PrepStyles {
    pub title: Style,
    pub heading: Style,
    pub muted: Style,
    pub index: Style,
    pub done: Style,
    pub pending: Style,
    pub bar_filled: Style,
    pub bar_empty: Style,
    pub tier_excellent: Style,
    pub tier_good: Style,
    pub tier_fair: Style,
    pub tier_poor: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

pub static PREP_STYLES: Lazy<PrepStyles> = Lazy::new(|| PrepStyles {
    title: Style::new().bold(),
    heading: Style::new().bold().underlined(),
    muted: Style::new().color256(246),
    index: Style::new().cyan(),
    done: Style::new().green(),
    pending: Style::new().color256(246),
    bar_filled: Style::new().green(),
    bar_empty: Style::new().color256(240),
    tier_excellent: Style::new().green().bold(),
    tier_good: Style::new().cyan(),
    tier_fair: Style::new().yellow(),
    tier_poor: Style::new().red(),
    info: Style::new(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red().bold(),
});

impl PrepStyles {
    pub fn tier(&self, tier: ProgressTier) -> &Style {
        match tier {
            ProgressTier::Excellent => &self.tier_excellent,
            ProgressTier::Good => &self.tier_good,
            ProgressTier::Fair => &self.tier_fair,
            ProgressTier::Poor => &self.tier_poor,
        }
    }

    pub fn phase(&self, state: PhaseState) -> &Style {
        match state {
            PhaseState::Done => &self.done,
            PhaseState::InProgress => &self.warning,
            PhaseState::NotStarted => &self.muted,
        }
    }
}

/// Applies `style` to `text`, or returns it unchanged when color is off.
pub fn paint(style: &Style, text: &str, use_color: bool) -> String {
    style
        .clone()
        .force_styling(use_color)
        .apply_to(text)
        .to_string()
}
