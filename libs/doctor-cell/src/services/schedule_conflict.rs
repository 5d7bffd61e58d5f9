// libs/doctor-cell/src/services/schedule_conflict.rs
use shared_models::split_overlap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{DayOfWeek, DoctorError, DoctorScheduleBlock};

/// Decides whether a new weekly schedule block collides with the doctor's
/// existing blocks.
///
/// `existing` must already be narrowed to the same doctor. The check is a pure
/// predicate; persisting the block afterwards is the caller's job, and so is
/// guarding against a concurrent writer inserting between check and write.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleConflictChecker;

impl ScheduleConflictChecker {
    pub fn new() -> Self {
        Self
    }

    /// True if `candidate` overlaps any block on the same day of week.
    pub fn conflicts(&self, candidate: &DoctorScheduleBlock, existing: &[DoctorScheduleBlock]) -> bool {
        self.conflicts_excluding(candidate, existing, None)
    }

    /// Same as [`conflicts`](Self::conflicts), skipping the stored block with
    /// id `exclude_id`. Used when re-checking an update against its own row.
    pub fn conflicts_excluding(
        &self,
        candidate: &DoctorScheduleBlock,
        existing: &[DoctorScheduleBlock],
        exclude_id: Option<Uuid>,
    ) -> bool {
        debug!(
            "Checking schedule conflicts for doctor {} on {} against {} blocks (excluding {:?})",
            candidate.doctor_id,
            candidate.day_of_week,
            existing.len(),
            exclude_id
        );

        same_day(candidate.day_of_week, existing, exclude_id)
            .any(|block| split_overlap(&candidate.schedule, &block.schedule))
    }

    /// Every same-day block that overlaps `candidate`, in input order.
    pub fn conflicting_blocks<'a>(
        &self,
        candidate: &DoctorScheduleBlock,
        existing: &'a [DoctorScheduleBlock],
        exclude_id: Option<Uuid>,
    ) -> Vec<&'a DoctorScheduleBlock> {
        same_day(candidate.day_of_week, existing, exclude_id)
            .filter(|block| split_overlap(&candidate.schedule, &block.schedule))
            .collect()
    }

    /// Reject path for callers about to persist `candidate`.
    pub fn ensure_no_conflict(
        &self,
        candidate: &DoctorScheduleBlock,
        existing: &[DoctorScheduleBlock],
        exclude_id: Option<Uuid>,
    ) -> Result<(), DoctorError> {
        match same_day(candidate.day_of_week, existing, exclude_id)
            .find(|block| split_overlap(&candidate.schedule, &block.schedule))
        {
            Some(block) => {
                warn!(
                    "Schedule conflict for doctor {} on {}: overlaps block {}",
                    candidate.doctor_id, candidate.day_of_week, block.id
                );
                Err(DoctorError::ScheduleConflict {
                    day_of_week: candidate.day_of_week,
                    conflicting_block_id: block.id,
                })
            }
            None => Ok(()),
        }
    }
}

fn same_day(
    day_of_week: DayOfWeek,
    existing: &[DoctorScheduleBlock],
    exclude_id: Option<Uuid>,
) -> impl Iterator<Item = &DoctorScheduleBlock> {
    existing
        .iter()
        .filter(move |block| block.day_of_week == day_of_week && Some(block.id) != exclude_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;
    use shared_utils::test_utils::split;
    use uuid::Uuid;

    fn block(day: DayOfWeek, schedule: shared_models::SplitSchedule) -> DoctorScheduleBlock {
        DoctorScheduleBlock::new(Uuid::nil(), day, schedule)
    }

    #[test]
    fn test_empty_existing_never_conflicts() {
        let checker = ScheduleConflictChecker::new();
        let candidate = block(DayOfWeek::Monday, split(((8, 0), (12, 0)), None));
        assert!(!checker.conflicts(&candidate, &[]));
        assert!(checker.ensure_no_conflict(&candidate, &[], None).is_ok());
    }

    #[test]
    fn test_other_days_are_ignored() {
        let checker = ScheduleConflictChecker::new();
        let existing = vec![block(DayOfWeek::Tuesday, split(((8, 0), (12, 0)), None))];
        let candidate = block(DayOfWeek::Monday, split(((8, 0), (12, 0)), None));
        assert!(!checker.conflicts(&candidate, &existing));
    }

    #[test]
    fn test_identical_same_day_block_conflicts() {
        let checker = ScheduleConflictChecker::new();
        let stored = block(DayOfWeek::Friday, split(((8, 0), (12, 0)), None));
        let duplicate = stored.clone();
        assert!(checker.conflicts(&duplicate, &[stored]));
    }

    #[test]
    fn test_excluded_id_is_skipped() {
        let checker = ScheduleConflictChecker::new();
        let stored = block(DayOfWeek::Friday, split(((8, 0), (12, 0)), None));
        let mut updated = stored.clone();
        updated.schedule = split(((9, 0), (13, 0)), None);
        let existing = [stored.clone()];

        assert!(checker.conflicts(&updated, &existing));
        assert!(!checker.conflicts_excluding(&updated, &existing, Some(stored.id)));
        assert!(checker.conflicting_blocks(&updated, &existing, Some(stored.id)).is_empty());
        assert!(checker.ensure_no_conflict(&updated, &existing, Some(stored.id)).is_ok());
    }

    #[test]
    fn test_exclude_id_only_skips_that_block() {
        let checker = ScheduleConflictChecker::new();
        let stored = block(DayOfWeek::Friday, split(((8, 0), (12, 0)), None));
        let other = block(DayOfWeek::Friday, split(((12, 30), (14, 0)), None));
        let mut updated = stored.clone();
        updated.schedule = split(((9, 0), (13, 0)), None);
        let existing = [stored.clone(), other.clone()];

        let hits = checker.conflicting_blocks(&updated, &existing, Some(stored.id));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, other.id);
    }
}
