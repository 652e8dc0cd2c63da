//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Layout math (column widths,
//! truncation, padding) is Unicode-aware through `unicode-width`, since item and
//! category titles in custom catalogs are not limited to ASCII.
//!
//! Every public renderer takes `use_color`. The CLI passes
//! [`console::colors_enabled`]; tests pass `false` and compare plain text.

use super::styles::{paint, PREP_STYLES};
use preptrackapp::api::{CmdMessage, ItemView, MessageLevel};
use preptrackapp::model::{Category, CategoryProgress, ProgressStats};
use preptrackapp::roadmap::{total_weeks, PhaseProgress, PhaseState, TipGroup};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 88;
pub const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 24;

pub fn progress_bar(percentage: u32, width: usize, use_color: bool) -> String {
    let filled = (percentage.min(100) as usize * width + 50) / 100;
    let s = &*PREP_STYLES;
    format!(
        "{}{}",
        paint(&s.bar_filled, &"█".repeat(filled), use_color),
        paint(&s.bar_empty, &"░".repeat(width - filled), use_color)
    )
}

fn stats_text(stats: &ProgressStats) -> String {
    format!("{}/{} ({}%)", stats.completed, stats.total, stats.percentage)
}

pub fn render_item_list(items: &[ItemView], use_color: bool) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let s = &*PREP_STYLES;
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for view in items {
        if current_category != Some(view.item.category.as_str()) {
            if current_category.is_some() {
                out.push('\n');
            }
            out.push_str(&paint(&s.heading, &view.category_name, use_color));
            out.push('\n');
            current_category = Some(view.item.category.as_str());
        }

        let (mark, mark_style) = if view.completed {
            ("[x]", &s.done)
        } else {
            ("[ ]", &s.pending)
        };
        let index = format!("{:>3}.", view.item.id);
        let hours = view
            .item
            .estimated_hours
            .map(|h| format!("{}h", h))
            .unwrap_or_default();

        // "  [x]  12. " prefix, title, then right-aligned hours
        let fixed = 2 + mark.width() + 1 + index.width() + 1 + 6;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&view.item.title, available);
        let padding = " ".repeat(available.saturating_sub(title.width()));

        out.push_str(&format!(
            "  {} {} {}{}{}\n",
            paint(mark_style, mark, use_color),
            paint(&s.index, &index, use_color),
            title,
            padding,
            paint(&s.muted, &format!("{:>6}", hours), use_color),
        ));
    }
    out
}

fn category_line(cp: &CategoryProgress, use_color: bool) -> String {
    let s = &*PREP_STYLES;
    let tier = cp.stats.tier();
    let name = pad_to_width(&truncate_to_width(&cp.category_name, NAME_WIDTH), NAME_WIDTH);
    format!(
        "  {} {} {:>13}  {}\n",
        name,
        progress_bar(cp.stats.percentage, BAR_WIDTH, use_color),
        stats_text(&cp.stats),
        paint(s.tier(tier), tier.label(), use_color),
    )
}

pub fn render_status(
    overall: &ProgressStats,
    categories: &[CategoryProgress],
    use_color: bool,
) -> String {
    let s = &*PREP_STYLES;
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {}\n",
        paint(&s.title, "Overall progress", use_color),
        progress_bar(overall.percentage, BAR_WIDTH, use_color),
        stats_text(overall),
    ));
    out.push_str(&paint(
        &s.muted,
        &format!("{} remaining", overall.remaining()),
        use_color,
    ));
    out.push_str("\n\n");

    for cp in categories {
        out.push_str(&category_line(cp, use_color));
    }
    out
}

/// Categories with their description, next to their progress.
pub fn render_categories(
    categories: &[Category],
    progress: &[CategoryProgress],
    use_color: bool,
) -> String {
    let s = &*PREP_STYLES;
    let mut out = String::new();
    for category in categories {
        let stats = progress
            .iter()
            .find(|cp| cp.category_id == category.id)
            .map(|cp| stats_text(&cp.stats))
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {}  {}\n",
            paint(&s.index, &pad_to_width(&category.id, 14), use_color),
            paint(&s.title, &category.name, use_color),
            paint(&s.muted, &stats, use_color),
        ));
        if !category.description.is_empty() {
            out.push_str(&format!(
                "{}{}\n",
                " ".repeat(15),
                truncate_to_width(&category.description, LINE_WIDTH - 15)
            ));
        }
    }
    out
}

fn phase_marker(state: PhaseState) -> &'static str {
    match state {
        PhaseState::Done => "✓",
        PhaseState::InProgress => "◐",
        PhaseState::NotStarted => "○",
    }
}

pub fn render_roadmap(phases: &[PhaseProgress], show_tips: bool, use_color: bool) -> String {
    let s = &*PREP_STYLES;
    let mut out = String::new();

    for (i, pp) in phases.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}  {}\n",
            paint(s.phase(pp.state), phase_marker(pp.state), use_color),
            paint(&s.title, pp.phase.title, use_color),
            paint(
                &s.muted,
                &format!("{} weeks", pp.phase.estimated_weeks),
                use_color
            ),
        ));
        out.push_str(&format!("  {}\n", pp.phase.description));

        for cp in &pp.categories {
            let check = if cp.stats.is_complete() { " ✓" } else { "" };
            out.push_str(&format!(
                "    {} {}{}\n",
                pad_to_width(&cp.category_name, NAME_WIDTH),
                stats_text(&cp.stats),
                paint(&s.done, check, use_color),
            ));
        }

        if show_tips {
            for tip in pp.phase.tips {
                out.push_str(&format!("    - {}\n", tip));
            }
            for resource in pp.phase.resources {
                out.push_str(&format!(
                    "    {} {}\n",
                    resource.title,
                    paint(&s.muted, resource.url, use_color)
                ));
            }
        }
    }
    if !phases.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            paint(
                &s.muted,
                &format!("Estimated total: {} weeks", total_weeks()),
                use_color
            )
        ));
    }
    out
}

pub fn render_study_tips(groups: &[TipGroup], use_color: bool) -> String {
    let s = &*PREP_STYLES;
    let mut out = String::new();
    for group in groups {
        out.push_str(&paint(&s.heading, group.topic, use_color));
        out.push('\n');
        for tip in group.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }
    out
}

pub fn render_config(entries: &[(&str, String)], use_color: bool) -> String {
    let s = &*PREP_STYLES;
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", paint(&s.index, key, use_color), value))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let s = &*PREP_STYLES;
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &s.info,
                MessageLevel::Success => &s.success,
                MessageLevel::Warning => &s.warning,
                MessageLevel::Error => &s.error,
            };
            format!("{}\n", paint(style, &msg.content, use_color))
        })
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusJson<'a> {
    overall_progress: &'a ProgressStats,
    category_progress: &'a [CategoryProgress],
}

pub fn status_json(
    overall: &ProgressStats,
    categories: &[CategoryProgress],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StatusJson {
        overall_progress: overall,
        category_progress: categories,
    })
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use preptrackapp::model::LearningItem;
    use preptrackapp::roadmap::PHASES;

    fn view(id: u32, title: &str, category: &str, completed: bool) -> ItemView {
        ItemView {
            item: LearningItem::new(id, title, category),
            category_name: category.to_uppercase(),
            completed,
        }
    }

    fn cp(name: &str, completed: usize, total: usize) -> CategoryProgress {
        CategoryProgress {
            category_id: name.to_lowercase(),
            category_name: name.to_string(),
            stats: ProgressStats::new(completed, total),
        }
    }

    #[test]
    fn test_progress_bar_widths() {
        assert_eq!(progress_bar(0, 10, false), "░".repeat(10));
        assert_eq!(progress_bar(100, 10, false), "█".repeat(10));
        assert_eq!(progress_bar(50, 10, false), format!("{}{}", "█".repeat(5), "░".repeat(5)));
        assert_eq!(progress_bar(3, 20, false).chars().count(), 20);
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_item_list(&[], false), "No items found.\n");
    }

    #[test]
    fn test_render_list_groups_by_category() {
        let items = vec![
            view(1, "Big-O", "algo", true),
            view(2, "Omega", "algo", false),
            view(3, "Arrays", "ds", false),
        ];
        let out = render_item_list(&items, false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "ALGO");
        assert!(lines[1].starts_with("  [x]   1. Big-O"));
        assert!(lines[2].starts_with("  [ ]   2. Omega"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "DS");
        assert!(lines[5].contains("3. Arrays"));
    }

    #[test]
    fn test_render_list_shows_hours() {
        let mut v = view(7, "Heaps", "ds", false);
        v.item.estimated_hours = Some(6);
        let out = render_item_list(&[v], false);
        assert!(out.lines().nth(1).unwrap().trim_end().ends_with("6h"));
    }

    #[test]
    fn test_render_status_lines() {
        let overall = ProgressStats::new(1, 3);
        let out = render_status(&overall, &[cp("Trees", 1, 2), cp("Graphs", 0, 1)], false);

        assert!(out.starts_with("Overall progress"));
        assert!(out.contains("1/3 (33%)"));
        assert!(out.contains("2 remaining"));
        assert!(out.contains("Trees"));
        assert!(out.contains("1/2 (50%)  fair"));
        assert!(out.contains("0/1 (0%)  needs work"));
    }

    #[test]
    fn test_render_roadmap_markers() {
        let phases = vec![
            PhaseProgress {
                number: 1,
                phase: PHASES[0],
                state: PhaseState::Done,
                categories: vec![cp("Algorithmic Complexity", 4, 4)],
            },
            PhaseProgress {
                number: 2,
                phase: PHASES[1],
                state: PhaseState::NotStarted,
                categories: vec![cp("Data Structures", 0, 8)],
            },
        ];
        let out = render_roadmap(&phases, false, false);

        assert!(out.contains("✓ Phase 1: Foundations  2 weeks"));
        assert!(out.contains("○ Phase 2: Data Structures  4 weeks"));
        assert!(out.contains("4/4 (100%) ✓"));
        assert!(!out.contains("Big-O Cheat Sheet"));
        assert!(out.ends_with("\nEstimated total: 20 weeks\n"));

        let with_tips = render_roadmap(&phases, true, false);
        assert!(with_tips.contains("Big-O Cheat Sheet https://www.bigocheatsheet.com/"));
        assert!(with_tips.contains("    - Implement every data structure yourself"));
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![CmdMessage::success("Done"), CmdMessage::info("Note")];
        assert_eq!(render_messages(&messages, false), "Done\nNote\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("this is too long", 8), "this is…");
        assert_eq!(truncate_to_width("動態規劃問題", 7), "動態規…");
    }

    #[test]
    fn test_status_json_shape() {
        let json = status_json(&ProgressStats::new(1, 4), &[cp("Trees", 1, 4)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overallProgress"]["percentage"], 25);
        assert_eq!(value["categoryProgress"][0]["categoryName"], "Trees");
    }
}
