//! Recommended study order.
//!
//! Six phases, each covering one or more catalog categories. Phase state is derived
//! from category progress: a category is finished only at 100%.

use crate::model::CategoryProgress;
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_weeks: u32,
    pub category_ids: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub resources: &'static [Resource],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipGroup {
    pub topic: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseState {
    Done,
    InProgress,
    NotStarted,
}

/// A phase joined with the current progress of its categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseProgress {
    pub number: usize,
    pub phase: Phase,
    pub state: PhaseState,
    /// Progress for each of the phase's categories that exists in the catalog.
    pub categories: Vec<CategoryProgress>,
}

pub const PHASES: &[Phase] = &[
    Phase {
        title: "Phase 1: Foundations",
        description: "Build the groundwork in programming and algorithms, and learn why complexity analysis matters.",
        estimated_weeks: 2,
        category_ids: &["algorithm"],
        tips: &[
            "Focus on what Big-O notation actually means",
            "Practice analyzing the time complexity of simple algorithms",
            "Build an intuition for efficiency",
        ],
        resources: &[
            Resource {
                title: "Big-O Cheat Sheet",
                url: "https://www.bigocheatsheet.com/",
            },
            Resource {
                title: "Algorithm Complexity",
                url: "https://en.wikipedia.org/wiki/Algorithmic_complexity",
            },
        ],
    },
    Phase {
        title: "Phase 2: Data Structures",
        description: "Implement and apply the fundamental data structures every algorithm builds on.",
        estimated_weeks: 4,
        category_ids: &["datastructure"],
        tips: &[
            "Implement every data structure yourself",
            "Know the time complexity of each operation",
            "Think about when each structure is the right fit",
        ],
        resources: &[Resource {
            title: "Data Structures Visualizations",
            url: "https://www.cs.usfca.edu/~galles/visualization/Algorithms.html",
        }],
    },
    Phase {
        title: "Phase 3: Sorting and Searching",
        description: "Master the classic sorting algorithms and key ideas such as divide and conquer.",
        estimated_weeks: 3,
        category_ids: &["sorting"],
        tips: &[
            "Compare the strengths and weaknesses of each sort",
            "Understand stability and in-place sorting",
            "Practice choosing a sort for a given situation",
        ],
        resources: &[],
    },
    Phase {
        title: "Phase 4: Trees",
        description: "Study trees in their many forms, including search trees and balanced trees.",
        estimated_weeks: 4,
        category_ids: &["tree"],
        tips: &[
            "Understand the recursive nature of trees",
            "Master every traversal order",
            "Learn to analyze the cost of tree operations",
        ],
        resources: &[],
    },
    Phase {
        title: "Phase 5: Graph Basics",
        description: "Learn graph representations and core algorithms as preparation for harder problems.",
        estimated_weeks: 3,
        category_ids: &["graph"],
        tips: &[
            "Know the different ways to represent a graph",
            "Master the uses of BFS and DFS",
            "Learn how shortest-path problems are solved",
        ],
        resources: &[],
    },
    Phase {
        title: "Phase 6: Dynamic Programming",
        description: "Learn to think in dynamic programming and solve hard optimization problems.",
        estimated_weeks: 4,
        category_ids: &["dynamic"],
        tips: &[
            "Recognize overlapping subproblems and optimal substructure",
            "Practice writing state transition equations",
            "Move from plain recursion to dynamic programming",
        ],
        resources: &[],
    },
];

pub const STUDY_TIPS: &[TipGroup] = &[
    TipGroup {
        topic: "Time management",
        tips: &[
            "Study at least 2-3 hours a day",
            "Break large topics into small tasks",
            "Set weekly goals",
            "Review regularly",
        ],
    },
    TipGroup {
        topic: "Hands-on practice",
        tips: &[
            "Implement right after learning the theory",
            "Write lots of code and solve lots of exercises",
            "Contribute to open source projects",
            "Build a personal portfolio",
        ],
    },
    TipGroup {
        topic: "Learning with others",
        tips: &[
            "Join a programming community",
            "Take part in a study group",
            "Share what you learn",
            "Ask others when you are stuck",
        ],
    },
    TipGroup {
        topic: "Interview preparation",
        tips: &[
            "Do mock interviews",
            "Prepare answers to common questions",
            "Practice whiteboard coding",
            "Learn the company's culture and tech stack",
        ],
    },
];

/// Total estimated study time across all phases.
pub fn total_weeks() -> u32 {
    PHASES.iter().map(|p| p.estimated_weeks).sum()
}

pub fn phase_state(categories: &[CategoryProgress], expected: usize) -> PhaseState {
    // Missing categories can never be finished.
    if categories.len() == expected && categories.iter().all(|c| c.stats.is_complete()) {
        PhaseState::Done
    } else if categories.iter().any(|c| c.stats.completed > 0) {
        PhaseState::InProgress
    } else {
        PhaseState::NotStarted
    }
}

pub fn phase_progress<S: ProgressStore>(tracker: &ProgressTracker<S>) -> Vec<PhaseProgress> {
    PHASES
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            let categories: Vec<CategoryProgress> = phase
                .category_ids
                .iter()
                .filter_map(|id| tracker.category_progress_for(id))
                .collect();
            PhaseProgress {
                number: i + 1,
                phase: *phase,
                state: phase_state(&categories, phase.category_ids.len()),
                categories,
            }
        })
        .collect()
}
