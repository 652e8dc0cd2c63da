use crate::commands::CmdResult;
use crate::error::Result;
use crate::roadmap::phase_progress;
use crate::store::ProgressStore;
use crate::tracker::ProgressTracker;

pub fn run<S: ProgressStore>(tracker: &ProgressTracker<S>) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_overall(tracker.overall_progress())
        .with_phases(phase_progress(tracker)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::roadmap::PhaseState;
    use crate::test_utils::tracker_with;

    #[test]
    fn returns_all_phases() {
        let mut tracker = tracker_with(Catalog::bundled());
        tracker.toggle_completion(24).unwrap();

        let result = run(&tracker).unwrap();

        assert_eq!(result.phases.len(), 6);
        assert_eq!(result.phases[4].state, PhaseState::InProgress);
        assert_eq!(result.phases[4].categories[0].category_id, "graph");
    }

    #[test]
    fn custom_catalog_without_phase_categories() {
        let tracker = tracker_with(crate::test_utils::small_catalog());
        let result = run(&tracker).unwrap();
        assert!(result.phases.iter().all(|p| p.categories.is_empty()));
        assert!(result.phases.iter().all(|p| p.state == PhaseState::NotStarted));
    }
}
