//! Interval conflict checking for schedule entries.
//!
//! Two entries conflict when they share a teacher or a group, fall on the same date
//! and their half-open time ranges `[start, end)` overlap. Entries that merely touch
//! (one ends when the other starts) do not conflict.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::schedule::ScheduleRepository,
    error::{
        domain::{ConflictSubject, DomainError},
        AppError,
    },
    model::schedule::ScheduleSubject,
};

/// Returns true when `[a_start, a_end)` and `[b_start, b_end)` share any instant.
pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && b_start < a_end
}

/// A validated date and time range with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// # Returns
    /// - `Ok(TimeSlot)` - Range is non-empty
    /// - `Err(DomainError::InvalidTimeRange)` - `start >= end`
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeRange);
        }

        Ok(Self { date, start, end })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        overlaps(self.start, self.end, start, end)
    }
}

/// Checks a time slot against the stored timeline of a teacher or group.
///
/// Read-only. Run it on the same transaction as the write it guards.
pub struct ConflictChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConflictChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether `slot` overlaps any stored entry of `subject`.
    ///
    /// # Arguments
    /// - `subject` - Teacher or group whose timeline to check
    /// - `slot` - Proposed date and time range
    /// - `exclude_id` - Entry being updated, ignored so it never conflicts with itself
    ///
    /// # Returns
    /// - `Ok(true)` - At least one overlapping entry exists
    /// - `Ok(false)` - Timeline is free for the slot
    /// - `Err(DbErr)` - Database error while loading the timeline
    pub async fn has_conflict(
        &self,
        subject: ScheduleSubject,
        slot: &TimeSlot,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let entries = ScheduleRepository::new(self.db)
            .find_by_subject_on_date(subject, slot.date())
            .await?;

        Ok(entries
            .iter()
            .filter(|entry| Some(entry.id) != exclude_id)
            .any(|entry| slot.overlaps(entry.start_time, entry.end_time)))
    }

    /// Rejects the slot if the group or the teacher is busy.
    ///
    /// The group timeline is checked first, so when both are busy the group
    /// conflict is the one reported.
    ///
    /// # Returns
    /// - `Ok(())` - Both timelines are free
    /// - `Err(DomainError::ScheduleConflict(_))` - Group or teacher already busy
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn ensure_free(
        &self,
        group_id: i32,
        teacher_id: i32,
        slot: &TimeSlot,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if self
            .has_conflict(ScheduleSubject::Group(group_id), slot, exclude_id)
            .await?
        {
            return Err(DomainError::ScheduleConflict(ConflictSubject::Group).into());
        }

        if self
            .has_conflict(ScheduleSubject::Teacher(teacher_id), slot, exclude_id)
            .await?
        {
            return Err(DomainError::ScheduleConflict(ConflictSubject::Teacher).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()
    }

    #[test]
    fn partial_overlap_conflicts() {
        assert!(overlaps(t(10, 0), t(11, 0), t(10, 30), t(11, 30)));
        assert!(overlaps(t(10, 30), t(11, 30), t(10, 0), t(11, 0)));
    }

    #[test]
    fn touching_intervals_do_not_conflict() {
        assert!(!overlaps(t(10, 0), t(11, 0), t(11, 0), t(12, 0)));
        assert!(!overlaps(t(11, 0), t(12, 0), t(10, 0), t(11, 0)));
    }

    #[test]
    fn containment_conflicts() {
        assert!(overlaps(t(9, 0), t(12, 0), t(10, 0), t(11, 0)));
        assert!(overlaps(t(10, 0), t(11, 0), t(9, 0), t(12, 0)));
    }

    #[test]
    fn identical_intervals_conflict() {
        assert!(overlaps(t(10, 0), t(11, 0), t(10, 0), t(11, 0)));
    }

    #[test]
    fn overlap_matches_definition_on_a_grid() {
        let points: Vec<NaiveTime> = (8..=12).map(|h| t(h, 0)).collect();
        for &s1 in &points {
            for &e1 in points.iter().filter(|e| **e > s1) {
                for &s2 in &points {
                    for &e2 in points.iter().filter(|e| **e > s2) {
                        assert_eq!(overlaps(s1, e1, s2, e2), s1 < e2 && s2 < e1);
                        assert_eq!(overlaps(s1, e1, s2, e2), overlaps(s2, e2, s1, e1));
                    }
                }
            }
        }
    }

    #[test]
    fn time_slot_rejects_empty_or_inverted_range() {
        assert_eq!(
            TimeSlot::new(day(), t(10, 0), t(10, 0)),
            Err(DomainError::InvalidTimeRange)
        );
        assert_eq!(
            TimeSlot::new(day(), t(11, 0), t(10, 0)),
            Err(DomainError::InvalidTimeRange)
        );
        assert!(TimeSlot::new(day(), t(10, 0), t(10, 1)).is_ok());
    }
}
