use chrono::Utc;

use crate::server::{
    middleware::auth::Access,
    model::{attendance::AttendanceFilter, user::User},
};

use super::*;

fn access(role: Role, scope: Scope) -> Access {
    Access {
        user: User {
            id: 1,
            username: "user".to_string(),
            role,
            student_id: None,
            teacher_id: None,
            created_at: Utc::now(),
        },
        scope,
    }
}

#[test]
fn full_scope_owns_everything() {
    let access = access(Role::Admin, Scope::All);

    assert!(access.ensure_owner(Some(5), None).is_ok());
    assert!(access.ensure_owner(None, None).is_ok());
}

#[test]
fn teacher_scope_matches_teacher_id() {
    let access = access(Role::Teacher, Scope::Teacher(5));

    assert!(access.ensure_owner(Some(5), None).is_ok());
    assert!(matches!(
        access.ensure_owner(Some(6), None),
        Err(AppError::AuthErr(AuthError::AccessDenied(1, _)))
    ));
}

#[test]
fn student_scope_matches_student_id() {
    let access = access(Role::Student, Scope::Student(9));

    assert!(access.ensure_owner(None, Some(9)).is_ok());
    assert!(access.ensure_owner(Some(9), None).is_err());
}

#[test]
fn restrict_pins_teacher_filter() {
    let access = access(Role::Teacher, Scope::Teacher(5));

    let filter = access
        .restrict(AttendanceFilter {
            schedule_id: Some(3),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(filter.teacher_id, Some(5));
    assert_eq!(filter.schedule_id, Some(3));
}

#[test]
fn restrict_denies_other_students_records() {
    let access = access(Role::Student, Scope::Student(9));

    let result = access.restrict(AttendanceFilter {
        student_id: Some(10),
        ..Default::default()
    });

    assert!(result.is_err());
}
