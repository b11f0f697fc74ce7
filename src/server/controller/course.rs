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
        course::{CreateCourseDto, CourseDto},
    },
    server::{
        controller::PaginationParams,
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::course::{Course, CourseParams},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Get paginated courses ordered by name.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = PaginatedDto<CourseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Courses, Action::Read)
        .await?;

    let courses = CourseService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(courses.into_dto(Course::into_dto))))
}

/// Create a course.
///
/// # Returns
/// - `201 Created` - Course created
/// - `400 Bad Request` - Negative class counts or name already taken
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Courses, Action::Write)
        .await?;

    let course = CourseService::new(&state.db)
        .create(CourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Courses, Action::Read)
        .await?;

    let course = CourseService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Course", id))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/courses/name/{name}",
    tag = COURSE_TAG,
    params(("name" = String, Path, description = "Course name")),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_name(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Courses, Action::Read)
        .await?;

    let course = CourseService::new(&state.db)
        .get_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course not found with name: {}", name)))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Courses, Action::Write)
        .await?;

    let course = CourseService::new(&state.db)
        .update(id, CourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course together with its schedule entries.
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Courses, Action::Write)
        .await?;

    CourseService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
