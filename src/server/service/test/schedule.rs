use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::create_schedule_with_dependencies,
        schedule::{time, ScheduleFactory},
    },
};

use crate::server::{
    error::{
        domain::{ConflictSubject, DomainError},
        AppError,
    },
    model::schedule::ScheduleParams,
    service::schedule::ScheduleService,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()
}

struct Refs {
    teacher_id: i32,
    group_id: i32,
    course_id: i32,
    class_type_id: i32,
}

impl Refs {
    async fn create(db: &DatabaseConnection) -> Result<Self, AppError> {
        let teacher = factory::create_teacher(db).await?;
        let group = factory::create_group(db).await?;
        let course = factory::create_course(db).await?;
        let class_type = factory::create_class_type(db).await?;

        Ok(Self {
            teacher_id: teacher.id,
            group_id: group.id,
            course_id: course.id,
            class_type_id: class_type.id,
        })
    }

    fn params(&self, start: NaiveTime, end: NaiveTime) -> ScheduleParams {
        ScheduleParams {
            date: day(),
            start_time: start,
            end_time: end,
            group_id: self.group_id,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            class_type_id: self.class_type_id,
        }
    }
}

fn is_conflict(result: &Result<impl std::fmt::Debug, AppError>, subject: ConflictSubject) -> bool {
    matches!(
        result,
        Err(AppError::DomainErr(DomainError::ScheduleConflict(s))) if *s == subject
    )
}

/// Tests a teacher cannot hold two overlapping classes.
///
/// Teacher has 10:00-11:00; a second group asks for the same teacher at 10:30-11:30.
///
/// Expected: Err(ScheduleConflict(Teacher))
#[tokio::test]
async fn rejects_overlap_for_same_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;
    let service = ScheduleService::new(db);

    service.create(refs.params(time(10, 0), time(11, 0))).await?;

    let other_group = factory::create_group(db).await?;
    let mut params = refs.params(time(10, 30), time(11, 30));
    params.group_id = other_group.id;
    let result = service.create(params).await;

    assert!(is_conflict(&result, ConflictSubject::Teacher));

    Ok(())
}

/// Tests back-to-back classes are allowed.
///
/// Expected: Ok for 11:00-12:00 after 10:00-11:00 with the same teacher and group
#[tokio::test]
async fn allows_touching_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;
    let service = ScheduleService::new(db);

    service.create(refs.params(time(10, 0), time(11, 0))).await?;
    let second = service.create(refs.params(time(11, 0), time(12, 0))).await?;

    assert_eq!(second.start_time, time(11, 0));

    Ok(())
}

/// Tests the group conflict is reported when both group and teacher are busy.
///
/// Expected: Err(ScheduleConflict(Group))
#[tokio::test]
async fn reports_group_before_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;
    let service = ScheduleService::new(db);

    service.create(refs.params(time(10, 0), time(11, 0))).await?;
    let result = service.create(refs.params(time(10, 15), time(10, 45))).await;

    assert!(is_conflict(&result, ConflictSubject::Group));

    Ok(())
}

/// Tests the same slot on a different date is free.
///
/// Expected: Ok
#[tokio::test]
async fn allows_same_slot_on_other_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;
    let service = ScheduleService::new(db);

    service.create(refs.params(time(10, 0), time(11, 0))).await?;
    let mut params = refs.params(time(10, 0), time(11, 0));
    params.date = day().succ_opt().unwrap();

    assert!(service.create(params).await.is_ok());

    Ok(())
}

/// Tests an entry can be updated without conflicting with itself.
///
/// Expected: Ok, entry shifted to 10:30-11:30
#[tokio::test]
async fn update_does_not_conflict_with_itself() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;
    let service = ScheduleService::new(db);

    let entry = service.create(refs.params(time(10, 0), time(11, 0))).await?;
    let updated = service
        .update(entry.id, refs.params(time(10, 30), time(11, 30)))
        .await?;

    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.start_time, time(10, 30));

    Ok(())
}

/// Tests an update into another entry's slot is rejected.
///
/// Expected: Err(ScheduleConflict(Group)) and the entry is unchanged
#[tokio::test]
async fn update_rejects_overlap_with_other_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;
    let service = ScheduleService::new(db);

    service.create(refs.params(time(9, 0), time(10, 0))).await?;
    let entry = service.create(refs.params(time(11, 0), time(12, 0))).await?;

    let result = service
        .update(entry.id, refs.params(time(9, 30), time(10, 30)))
        .await;

    assert!(is_conflict(&result, ConflictSubject::Group));
    let stored = service.get_by_id(entry.id).await?.unwrap();
    assert_eq!(stored.start_time, time(11, 0));

    Ok(())
}

/// Tests inverted time ranges are rejected before touching the database.
///
/// Expected: Err(InvalidTimeRange)
#[tokio::test]
async fn rejects_inverted_time_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;

    let result = ScheduleService::new(db)
        .create(refs.params(time(12, 0), time(11, 0)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::InvalidTimeRange))
    ));

    Ok(())
}

/// Tests references are resolved in order group, course, teacher, class type.
///
/// Both course and teacher are missing.
///
/// Expected: Err(ReferenceNotFound) naming the course
#[tokio::test]
async fn reports_first_missing_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let refs = Refs::create(db).await?;

    let mut params = refs.params(time(10, 0), time(11, 0));
    params.course_id = 900;
    params.teacher_id = 901;
    let result = ScheduleService::new(db).create(params).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ReferenceNotFound { entity: "Course", id: 900 }))
    ));

    Ok(())
}

/// Tests the formatted lookup by group name.
///
/// Expected: one entry carrying the group's name
#[tokio::test]
async fn finds_info_by_group_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, group, _, _, _) = create_schedule_with_dependencies(db).await?;

    let info = ScheduleService::new(db)
        .get_info_by_group_name(&group.name)
        .await?;

    assert_eq!(info.len(), 1);
    assert_eq!(info[0].group_name, group.name);

    Ok(())
}

/// Tests the formatted lookup reports a teacher without classes as not found.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn info_by_teacher_email_is_not_found_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let teacher = factory::create_teacher(db).await?;

    let result = ScheduleService::new(db)
        .get_info_by_teacher_email(&teacher.email)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests paged listing by teacher only returns that teacher's entries.
///
/// Expected: total 2 for the teacher, other teacher's entry excluded
#[tokio::test]
async fn pages_entries_by_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (teacher, group, course, class_type, _) = create_schedule_with_dependencies(db).await?;
    ScheduleFactory::new(db, group.id, course.id, teacher.id, class_type.id)
        .times(time(12, 0), time(13, 0))
        .build()
        .await?;
    create_schedule_with_dependencies(db).await?;

    let page = ScheduleService::new(db)
        .get_by_teacher_paginated(teacher.id, 0, 10)
        .await?;

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|s| s.teacher_id == teacher.id));

    Ok(())
}
