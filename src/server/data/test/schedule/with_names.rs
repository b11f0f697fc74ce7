use super::*;

/// Tests references are resolved to display names.
///
/// Expected: teacher full name, course, class type and group names filled in
#[tokio::test]
async fn resolves_reference_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::teacher::TeacherFactory::new(db)
        .last_name("Petrov")
        .name("Ivan")
        .build()
        .await?;
    let group = factory::student_group::GroupFactory::new(db)
        .name("CS-101")
        .build()
        .await?;
    let course = factory::course::CourseFactory::new(db)
        .name("Algebra")
        .build()
        .await?;
    let class_type = factory::class_type::create_class_type_named(db, "Lecture").await?;
    factory::create_schedule(db, group.id, course.id, teacher.id, class_type.id).await?;

    let repo = ScheduleRepository::new(db);
    let entries = repo.find_by_group(group.id).await?;
    let infos = repo.with_names(entries).await?;

    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].teacher_name, "Petrov Ivan");
    assert_eq!(infos[0].course_name, "Algebra");
    assert_eq!(infos[0].class_type_name, "Lecture");
    assert_eq!(infos[0].group_name, "CS-101");

    Ok(())
}

/// Tests an empty input needs no lookups and yields nothing.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn handles_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let infos = repo.with_names(Vec::new()).await?;

    assert!(infos.is_empty());

    Ok(())
}
