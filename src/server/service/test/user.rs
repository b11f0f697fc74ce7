use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_student_with_group},
};

use crate::{
    model::user::Role,
    server::{
        data::{group::GroupRepository, student::StudentRepository, teacher::TeacherRepository},
        error::{domain::DomainError, AppError},
        model::user::{RegisterUserParams, UpdateUserParams},
        service::{auth::AuthService, user::UserService},
    },
};

fn register(username: &str, role: Role, related_id: Option<i32>) -> RegisterUserParams {
    RegisterUserParams {
        username: username.to_string(),
        password: "secret".to_string(),
        role,
        related_id,
    }
}

/// Tests registering a teacher account links it to the teacher.
///
/// Expected: role TEACHER with teacher_id set, and the password works for login
#[tokio::test]
async fn registers_teacher_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let teacher = factory::create_teacher(db).await?;

    let user = UserService::new(db)
        .register(register("ivanov", Role::Teacher, Some(teacher.id)))
        .await?;

    assert_eq!(user.role, Role::Teacher);
    assert_eq!(user.teacher_id, Some(teacher.id));
    assert_eq!(user.student_id, None);
    assert_eq!(AuthService::new(db).login("ivanov", "secret").await?.id, user.id);

    Ok(())
}

/// Tests a student account needs the student id.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn student_account_requires_related_id() {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .register(register("anna", Role::Student, None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests linking to a student that does not exist.
///
/// Expected: Err(ReferenceNotFound) for the student
#[tokio::test]
async fn rejects_link_to_missing_student() {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .register(register("anna", Role::Student, Some(55)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ReferenceNotFound { entity: "Student", id: 55 }))
    ));
}

/// Tests usernames are unique.
///
/// Expected: Err(BadRequest) for the second registration
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let result = UserService::new(db)
        .register(register(&admin.username, Role::Admin, None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the bootstrap admin is only created once.
///
/// Expected: true on first call, false on second
#[tokio::test]
async fn bootstraps_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    assert!(service.bootstrap_admin("root", "root").await?);
    assert!(!service.bootstrap_admin("root2", "root2").await?);

    Ok(())
}

/// Tests an update with no fields set returns the stored account.
///
/// Expected: Ok with unchanged username
#[tokio::test]
async fn empty_update_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let user = UserService::new(db)
        .update(admin.id, UpdateUserParams::default())
        .await?;

    assert_eq!(user.username, admin.username);

    Ok(())
}

/// Tests switching an admin to a student account.
///
/// Expected: role STUDENT linked to the student
#[tokio::test]
async fn update_relinks_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let (_, student) = create_student_with_group(db).await?;

    let user = UserService::new(db)
        .update(
            admin.id,
            UpdateUserParams {
                role: Some(Role::Student),
                related_id: Some(student.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(user.role, Role::Student);
    assert_eq!(user.student_id, Some(student.id));
    assert_eq!(user.teacher_id, None);

    Ok(())
}

/// Tests deleting a student account removes the student and frees the seat.
///
/// Expected: student gone and group counter 1 -> 0
#[tokio::test]
async fn deleting_student_account_releases_seat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (group, student) = create_student_with_group(db).await?;
    let account = factory::create_student_user(db, student.id).await?;

    UserService::new(db).delete(account.id).await?;

    assert!(StudentRepository::new(db)
        .find_by_id(student.id)
        .await?
        .is_none());
    assert_eq!(
        GroupRepository::new(db)
            .find_by_id(group.id)
            .await?
            .unwrap()
            .current_occupancy,
        0
    );

    Ok(())
}

/// Tests deleting a teacher account removes the teacher.
///
/// Expected: teacher gone
#[tokio::test]
async fn deleting_teacher_account_removes_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_university_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let teacher = factory::create_teacher(db).await?;
    let account = factory::create_teacher_user(db, teacher.id).await?;

    UserService::new(db).delete(account.id).await?;

    assert!(TeacherRepository::new(db)
        .find_by_id(teacher.id)
        .await?
        .is_none());

    Ok(())
}
