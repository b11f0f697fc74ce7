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
        teacher::{CreateTeacherDto, TeacherDto},
    },
    server::{
        controller::PaginationParams,
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::teacher::{Teacher, TeacherParams},
        service::teacher::TeacherService,
        state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

/// Get paginated teachers ordered by last name.
#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = PaginatedDto<TeacherDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Teachers, Action::Read)
        .await?;

    let teachers = TeacherService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(teachers.into_dto(Teacher::into_dto))))
}

/// Create a teacher.
///
/// # Returns
/// - `201 Created` - Teacher created
/// - `400 Bad Request` - Email already used by another teacher
#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Successfully created teacher", body = TeacherDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Teachers, Action::Write)
        .await?;

    let teacher = TeacherService::new(&state.db)
        .create(TeacherParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Teachers, Action::Read)
        .await?;

    let teacher = TeacherService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Teacher", id))?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teachers/email/{email}",
    tag = TEACHER_TAG,
    params(("email" = String, Path, description = "Teacher email address")),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_by_email(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Teachers, Action::Read)
        .await?;

    let teacher = TeacherService::new(&state.db)
        .get_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Teacher not found with email: {}", email)))?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    request_body = CreateTeacherDto,
    responses(
        (status = 200, description = "Successfully updated teacher", body = TeacherDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Teachers, Action::Write)
        .await?;

    let teacher = TeacherService::new(&state.db)
        .update(id, TeacherParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Delete a teacher together with their schedule entries.
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Successfully deleted teacher"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Teachers, Action::Write)
        .await?;

    TeacherService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
