//! Access policy.
//!
//! Every authorization decision in the API is a lookup in [`grant`]. Controllers
//! never branch on roles themselves: they ask `AuthGuard` for a resource and action
//! and, when the grant is [`Grant::Own`], check ownership of the rows they touch.

use std::fmt;

use crate::model::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Teachers,
    Groups,
    Courses,
    ClassTypes,
    AttendanceStatuses,
    Students,
    Schedules,
    Attendance,
    /// Attendance listings filtered by status.
    AttendanceByStatus,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Users => "users",
            Self::Teachers => "teachers",
            Self::Groups => "groups",
            Self::Courses => "courses",
            Self::ClassTypes => "class types",
            Self::AttendanceStatuses => "attendance statuses",
            Self::Students => "students",
            Self::Schedules => "schedules",
            Self::Attendance => "attendance",
            Self::AttendanceByStatus => "attendance by status",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Write,
}

/// Outcome of a policy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// Allowed on every row.
    All,
    /// Allowed only on rows linked to the caller's own teacher or student record.
    Own,
    Denied,
}

/// Looks up what `role` may do with `resource`.
pub fn grant(role: Role, resource: Resource, action: Action) -> Grant {
    use Action::*;
    use Resource::*;

    match (role, resource, action) {
        (Role::Admin, _, _) => Grant::All,

        (_, AttendanceStatuses | Students | Schedules, Read) => Grant::All,

        (Role::Teacher, Schedules, Write) => Grant::Own,
        (Role::Teacher, Attendance, _) => Grant::Own,
        (Role::Teacher, AttendanceByStatus, Read) => Grant::All,

        (Role::Student, Attendance, Read) => Grant::Own,

        _ => Grant::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_RESOURCES: [Resource; 10] = [
        Resource::Users,
        Resource::Teachers,
        Resource::Groups,
        Resource::Courses,
        Resource::ClassTypes,
        Resource::AttendanceStatuses,
        Resource::Students,
        Resource::Schedules,
        Resource::Attendance,
        Resource::AttendanceByStatus,
    ];

    #[test]
    fn admin_is_granted_everything() {
        for resource in ALL_RESOURCES {
            for action in [Action::Read, Action::Write] {
                assert_eq!(grant(Role::Admin, resource, action), Grant::All);
            }
        }
    }

    #[test]
    fn reference_data_is_admin_only() {
        for resource in [
            Resource::Users,
            Resource::Teachers,
            Resource::Groups,
            Resource::Courses,
            Resource::ClassTypes,
        ] {
            for role in [Role::Teacher, Role::Student] {
                assert_eq!(grant(role, resource, Action::Read), Grant::Denied);
                assert_eq!(grant(role, resource, Action::Write), Grant::Denied);
            }
        }
    }

    #[test]
    fn everyone_reads_statuses_students_and_schedules() {
        for resource in [
            Resource::AttendanceStatuses,
            Resource::Students,
            Resource::Schedules,
        ] {
            for role in [Role::Teacher, Role::Student] {
                assert_eq!(grant(role, resource, Action::Read), Grant::All);
            }
        }
        assert_eq!(
            grant(Role::Teacher, Resource::Students, Action::Write),
            Grant::Denied
        );
        assert_eq!(
            grant(Role::Teacher, Resource::AttendanceStatuses, Action::Write),
            Grant::Denied
        );
    }

    #[test]
    fn teacher_manages_own_schedule_and_attendance() {
        assert_eq!(
            grant(Role::Teacher, Resource::Schedules, Action::Write),
            Grant::Own
        );
        assert_eq!(
            grant(Role::Teacher, Resource::Attendance, Action::Read),
            Grant::Own
        );
        assert_eq!(
            grant(Role::Teacher, Resource::Attendance, Action::Write),
            Grant::Own
        );
        assert_eq!(
            grant(Role::Teacher, Resource::AttendanceByStatus, Action::Read),
            Grant::All
        );
    }

    #[test]
    fn student_only_reads_own_attendance() {
        assert_eq!(
            grant(Role::Student, Resource::Attendance, Action::Read),
            Grant::Own
        );
        assert_eq!(
            grant(Role::Student, Resource::Attendance, Action::Write),
            Grant::Denied
        );
        assert_eq!(
            grant(Role::Student, Resource::Schedules, Action::Write),
            Grant::Denied
        );
        assert_eq!(
            grant(Role::Student, Resource::AttendanceByStatus, Action::Read),
            Grant::Denied
        );
    }
}
