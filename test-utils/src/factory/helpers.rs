//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used by every factory and shortcuts for creating
//! entities together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a schedule entry with freshly created teacher, group, course and class type.
///
/// All entities use default values. Use the individual factories to customize them.
///
/// # Returns
/// - `Ok((teacher, group, course, class_type, schedule))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_schedule_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::teacher::Model,
        entity::student_group::Model,
        entity::course::Model,
        entity::class_type::Model,
        entity::schedule::Model,
    ),
    DbErr,
> {
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let group = crate::factory::student_group::create_group(db).await?;
    let course = crate::factory::course::create_course(db).await?;
    let class_type = crate::factory::class_type::create_class_type(db).await?;
    let schedule = crate::factory::schedule::create_schedule(
        db,
        group.id,
        course.id,
        teacher.id,
        class_type.id,
    )
    .await?;

    Ok((teacher, group, course, class_type, schedule))
}

/// Creates a group and one student in it, with the group's counter set to 1.
///
/// # Returns
/// - `Ok((group, student))` - Created group and student
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_group(
    db: &DatabaseConnection,
) -> Result<(entity::student_group::Model, entity::student::Model), DbErr> {
    let group = crate::factory::student_group::GroupFactory::new(db)
        .current_occupancy(1)
        .build()
        .await?;
    let student = crate::factory::student::create_student(db, group.id).await?;

    Ok((group, student))
}
