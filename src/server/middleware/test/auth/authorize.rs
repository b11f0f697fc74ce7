use super::*;

/// Tests an admin gets unrestricted access to reference data.
///
/// Expected: Ok(Access) with Scope::All
#[tokio::test]
async fn admin_gets_full_scope() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let access = AuthGuard::new(db, session)
        .authorize(Resource::Groups, Action::Write)
        .await?;

    assert_eq!(access.scope, Scope::All);
    assert_eq!(access.user.id, admin.id);

    Ok(())
}

/// Tests a teacher writing schedules is scoped to their own entries.
///
/// Expected: Ok(Access) with Scope::Teacher(teacher id)
#[tokio::test]
async fn teacher_gets_own_scope_for_schedules() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::create_teacher(db).await?;
    let account = factory::create_teacher_user(db, teacher.id).await?;
    AuthSession::new(session).set_user_id(account.id).await?;

    let access = AuthGuard::new(db, session)
        .authorize(Resource::Schedules, Action::Write)
        .await?;

    assert_eq!(access.scope, Scope::Teacher(teacher.id));

    Ok(())
}

/// Tests a student is denied group management.
///
/// Expected: Err(AuthError::AccessDenied) carrying the student's account id
#[tokio::test]
async fn student_is_denied_group_write() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, student) = factory::helpers::create_student_with_group(db).await?;
    let account = factory::create_student_user(db, student.id).await?;
    AuthSession::new(session).set_user_id(account.id).await?;

    let result = AuthGuard::new(db, session)
        .authorize(Resource::Groups, Action::Write)
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, account.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests a teacher account with no linked teacher owns nothing.
///
/// Expected: Err(AuthError::AccessDenied) for an Own grant
#[tokio::test]
async fn unlinked_teacher_is_denied_own_grant() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let account = factory::user::UserFactory::new(db)
        .role("TEACHER")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(account.id).await?;

    let result = AuthGuard::new(db, session)
        .authorize(Resource::Attendance, Action::Write)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an anonymous request is rejected before the policy is consulted.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn anonymous_request_is_unauthenticated() {
    let mut test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session)
        .authorize(Resource::Schedules, Action::Read)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}
