//! Business rule violations.
//!
//! These are raised by the service layer when a request is well-formed but cannot be
//! applied to the current state. None of them are retryable: the transaction that
//! detected the violation is rolled back and nothing is written.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

use super::error_response;

/// Which timeline an overlapping schedule entry was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictSubject {
    Group,
    Teacher,
}

impl fmt::Display for ConflictSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "Group"),
            Self::Teacher => write!(f, "Teacher"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced row does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{entity} not found with id: {id}")]
    ReferenceNotFound { entity: &'static str, id: i32 },

    /// The schedule entry overlaps an existing one for the same group or teacher.
    ///
    /// Results in 409 Conflict.
    #[error("{0} is already busy at this time")]
    ScheduleConflict(ConflictSubject),

    /// The group has no free seat.
    ///
    /// Results in 409 Conflict.
    #[error("Group '{name}' is at maximum capacity")]
    GroupAtCapacity { group_id: i32, name: String },

    /// An attendance record already exists for this student and class.
    ///
    /// Results in 409 Conflict.
    #[error("Attendance already marked for student {student_id} in schedule {schedule_id}")]
    DuplicateAttendance { schedule_id: i32, student_id: i32 },

    /// Start time is not strictly before end time.
    ///
    /// Results in 400 Bad Request.
    #[error("Start time must be before end time")]
    InvalidTimeRange,
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::ReferenceNotFound { entity, id }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::ReferenceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::ScheduleConflict(_)
            | Self::GroupAtCapacity { .. }
            | Self::DuplicateAttendance { .. } => StatusCode::CONFLICT,
            Self::InvalidTimeRange => StatusCode::BAD_REQUEST,
        }
    }
}

/// Business errors carry client-safe messages, so the message is returned as-is.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_the_busy_subject() {
        assert_eq!(
            DomainError::ScheduleConflict(ConflictSubject::Group).to_string(),
            "Group is already busy at this time"
        );
        assert_eq!(
            DomainError::ScheduleConflict(ConflictSubject::Teacher).to_string(),
            "Teacher is already busy at this time"
        );
    }

    #[test]
    fn maps_each_violation_to_its_status() {
        assert_eq!(
            DomainError::not_found("Group", 1).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DomainError::GroupAtCapacity {
                group_id: 1,
                name: "A".to_string()
            }
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            DomainError::InvalidTimeRange.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
