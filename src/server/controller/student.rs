use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        student::{CreateStudentDto, StudentDto},
    },
    server::{
        controller::PaginationParams,
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::student::{Student, StudentParams},
        service::{group::GroupService, student::StudentService},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Get paginated students ordered by last name.
///
/// # Access Control
/// - All roles can read students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = PaginatedDto<StudentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Students, Action::Read)
        .await?;

    let students = StudentService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(students.into_dto(Student::into_dto))))
}

/// Enroll a new student in a group.
///
/// Takes one seat in the group. The student is not created if the group is full.
///
/// # Access Control
/// - `Admin` - Only admins can create students
///
/// # Returns
/// - `201 Created` - Student created and seat taken
/// - `404 Not Found` - Group does not exist
/// - `409 Conflict` - Group is at maximum capacity
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Group is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Students, Action::Write)
        .await?;

    let student = StudentService::new(&state.db)
        .create(StudentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Students, Action::Read)
        .await?;

    let student = StudentService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Student", id))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Get the students enrolled in a group.
#[utoipa::path(
    get,
    path = "/api/students/group/{group_id}",
    tag = STUDENT_TAG,
    params(("group_id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Students, Action::Read)
        .await?;

    let students = GroupService::new(&state.db).get_students(group_id).await?;
    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update a student.
///
/// Changing `group_id` moves the student's seat to the new group, which must have
/// a free seat.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Student or group not found", body = ErrorDto),
        (status = 409, description = "New group is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Students, Action::Write)
        .await?;

    let student = StudentService::new(&state.db)
        .update(id, StudentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student and free their seat.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Students, Action::Write)
        .await?;

    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
