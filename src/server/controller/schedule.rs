use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        schedule::{CreateScheduleDto, ScheduleDto, ScheduleInfoDto},
    },
    server::{
        controller::PaginationParams,
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::schedule::{Schedule, ScheduleInfo, ScheduleParams},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

fn to_dtos(schedules: Vec<Schedule>) -> Vec<ScheduleDto> {
    schedules.into_iter().map(Schedule::into_dto).collect()
}

fn to_info_dtos(info: Vec<ScheduleInfo>) -> Vec<ScheduleInfoDto> {
    info.into_iter().map(ScheduleInfo::into_dto).collect()
}

/// Get the paginated timetable in chronological order.
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedule", body = PaginatedDto<ScheduleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedules = ScheduleService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(schedules.into_dto(Schedule::into_dto))))
}

/// Create a schedule entry.
///
/// The entry is rejected if its group or its teacher already has an overlapping
/// entry on the same date. Back-to-back entries (one ending when the next starts)
/// are allowed.
///
/// # Access Control
/// - `Admin` - Any entry
/// - `Teacher` - Only entries they teach
///
/// # Returns
/// - `201 Created` - Entry created
/// - `400 Bad Request` - Start time not before end time
/// - `404 Not Found` - Group, course, teacher or class type missing
/// - `409 Conflict` - Group or teacher already busy at this time
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Successfully created schedule entry", body = ScheduleDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may not schedule this teacher", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 409, description = "Group or teacher already busy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Write)
        .await?;
    access.ensure_owner(Some(payload.teacher_id), None)?;

    let schedule = ScheduleService::new(&state.db)
        .create(ScheduleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 200, description = "Successfully retrieved schedule entry", body = ScheduleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedule = ScheduleService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Schedule", id))?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Replace a schedule entry.
///
/// The entry never conflicts with itself. A teacher can only edit their own entries
/// and cannot hand them over to another teacher.
#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    request_body = CreateScheduleDto,
    responses(
        (status = 200, description = "Successfully updated schedule entry", body = ScheduleDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own this entry", body = ErrorDto),
        (status = 404, description = "Entry or referenced row not found", body = ErrorDto),
        (status = 409, description = "Group or teacher already busy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Write)
        .await?;

    let service = ScheduleService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Schedule", id))?;
    access.ensure_owner(Some(existing.teacher_id), None)?;
    access.ensure_owner(Some(payload.teacher_id), None)?;

    let schedule = service
        .update(id, ScheduleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Delete a schedule entry and the attendance marked for it.
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 204, description = "Successfully deleted schedule entry"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own this entry", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Write)
        .await?;

    let service = ScheduleService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Schedule", id))?;
    access.ensure_owner(Some(existing.teacher_id), None)?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/schedules/group/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Successfully retrieved group schedule", body = Vec<ScheduleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_by_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedules = ScheduleService::new(&state.db).get_by_group(id).await?;

    Ok((StatusCode::OK, Json(to_dtos(schedules))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/group/{id}/page",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Group ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group schedule", body = PaginatedDto<ScheduleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_by_group_paginated(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedules = ScheduleService::new(&state.db)
        .get_by_group_paginated(id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(schedules.into_dto(Schedule::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/group/{id}/info",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Successfully retrieved group timetable", body = Vec<ScheduleInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_info_by_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let info = ScheduleService::new(&state.db).get_group_info(id).await?;

    Ok((StatusCode::OK, Json(to_info_dtos(info))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/teacher/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Successfully retrieved teacher schedule", body = Vec<ScheduleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_by_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedules = ScheduleService::new(&state.db).get_by_teacher(id).await?;

    Ok((StatusCode::OK, Json(to_dtos(schedules))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/teacher/{id}/page",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher schedule", body = PaginatedDto<ScheduleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_by_teacher_paginated(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedules = ScheduleService::new(&state.db)
        .get_by_teacher_paginated(id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(schedules.into_dto(Schedule::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/teacher/{id}/info",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Successfully retrieved teacher timetable", body = Vec<ScheduleInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_info_by_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let info = ScheduleService::new(&state.db).get_teacher_info(id).await?;

    Ok((StatusCode::OK, Json(to_info_dtos(info))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/date/{date}",
    tag = SCHEDULE_TAG,
    params(("date" = String, Path, description = "Date in YYYY-MM-DD format")),
    responses(
        (status = 200, description = "Successfully retrieved schedule for the date", body = Vec<ScheduleDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules_by_date(
    State(state): State<AppState>,
    session: Session,
    Path(date): Path<NaiveDate>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let schedules = ScheduleService::new(&state.db).get_by_date(date).await?;

    Ok((StatusCode::OK, Json(to_dtos(schedules))))
}

/// Formatted timetable of a group looked up by name.
///
/// # Returns
/// - `200 OK` - Non-empty timetable
/// - `404 Not Found` - Unknown group or no entries
#[utoipa::path(
    get,
    path = "/api/schedules/group/name/{name}/info",
    tag = SCHEDULE_TAG,
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Successfully retrieved group timetable", body = Vec<ScheduleInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found or has no entries", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_info_by_group_name(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let info = ScheduleService::new(&state.db)
        .get_info_by_group_name(&name)
        .await?;

    Ok((StatusCode::OK, Json(to_info_dtos(info))))
}

/// Formatted timetable of a teacher looked up by email.
///
/// # Returns
/// - `200 OK` - Non-empty timetable
/// - `404 Not Found` - Unknown teacher or no entries
#[utoipa::path(
    get,
    path = "/api/schedules/teacher/email/{email}/info",
    tag = SCHEDULE_TAG,
    params(("email" = String, Path, description = "Teacher email address")),
    responses(
        (status = 200, description = "Successfully retrieved teacher timetable", body = Vec<ScheduleInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found or has no entries", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_info_by_teacher_email(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Schedules, Action::Read)
        .await?;

    let info = ScheduleService::new(&state.db)
        .get_info_by_teacher_email(&email)
        .await?;

    Ok((StatusCode::OK, Json(to_info_dtos(info))))
}
