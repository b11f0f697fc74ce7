use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        attendance_status::{AttendanceStatusDto, CreateAttendanceStatusDto},
    },
    server::{
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::attendance_status::AttendanceStatus,
        service::attendance_status::AttendanceStatusService,
        state::AppState,
    },
};

/// Tag for grouping attendance status endpoints in OpenAPI documentation
pub static ATTENDANCE_STATUS_TAG: &str = "attendance_status";

/// List every attendance status. Readable by all roles.
#[utoipa::path(
    get,
    path = "/api/attendance-statuses",
    tag = ATTENDANCE_STATUS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved statuses", body = Vec<AttendanceStatusDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_statuses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::AttendanceStatuses, Action::Read)
        .await?;

    let statuses = AttendanceStatusService::new(&state.db).get_all().await?;
    let dtos: Vec<AttendanceStatusDto> = statuses
        .into_iter()
        .map(AttendanceStatus::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/attendance-statuses",
    tag = ATTENDANCE_STATUS_TAG,
    request_body = CreateAttendanceStatusDto,
    responses(
        (status = 201, description = "Successfully created status", body = AttendanceStatusDto),
        (status = 400, description = "Name empty or already taken", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attendance_status(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAttendanceStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::AttendanceStatuses, Action::Write)
        .await?;

    let status = AttendanceStatusService::new(&state.db)
        .create(payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(status.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/attendance-statuses/{id}",
    tag = ATTENDANCE_STATUS_TAG,
    params(("id" = i32, Path, description = "Attendance status ID")),
    responses(
        (status = 200, description = "Successfully retrieved status", body = AttendanceStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_status_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::AttendanceStatuses, Action::Read)
        .await?;

    let status = AttendanceStatusService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Attendance status", id))?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Delete a status. Attendance records using it are deleted with it.
#[utoipa::path(
    delete,
    path = "/api/attendance-statuses/{id}",
    tag = ATTENDANCE_STATUS_TAG,
    params(("id" = i32, Path, description = "Attendance status ID")),
    responses(
        (status = 204, description = "Successfully deleted status"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attendance_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::AttendanceStatuses, Action::Write)
        .await?;

    AttendanceStatusService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
