use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        attendance::{
            AttendanceDto, AttendanceInfoDto, CreateAttendanceDto, MarkAttendanceDto,
            MarkGroupAttendanceDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::attendance::{Attendance, AttendanceFilter, AttendanceInfo, AttendanceParams},
        service::{attendance::AttendanceService, schedule::ScheduleService},
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Query parameters for the attendance listing. Filters combine with AND.
#[derive(Deserialize)]
pub struct AttendanceQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
    pub schedule_id: Option<i32>,
    pub student_id: Option<i32>,
    pub status_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

impl AttendanceQuery {
    fn filter(&self) -> AttendanceFilter {
        AttendanceFilter {
            schedule_id: self.schedule_id,
            student_id: self.student_id,
            status_id: self.status_id,
            teacher_id: self.teacher_id,
        }
    }
}

/// Teacher of the class a record belongs to.
async fn schedule_teacher(db: &DatabaseConnection, schedule_id: i32) -> Result<i32, AppError> {
    let Some(schedule) = ScheduleService::new(db).get_by_id(schedule_id).await? else {
        return Err(DomainError::not_found("Schedule", schedule_id).into());
    };

    Ok(schedule.teacher_id)
}

fn to_dtos(records: Vec<Attendance>) -> Vec<AttendanceDto> {
    records.into_iter().map(Attendance::into_dto).collect()
}

fn to_info_dtos(info: Vec<AttendanceInfo>) -> Vec<AttendanceInfoDto> {
    info.into_iter().map(AttendanceInfo::into_dto).collect()
}

/// Get paginated attendance records.
///
/// # Access Control
/// - `Admin` - Every record
/// - `Teacher` - Records for classes they teach
/// - `Student` - Their own records
///
/// Asking for another teacher's or student's records explicitly returns 403.
#[utoipa::path(
    get,
    path = "/api/attendances",
    tag = ATTENDANCE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("schedule_id" = Option<i32>, Query, description = "Only records of this schedule entry"),
        ("student_id" = Option<i32>, Query, description = "Only records of this student"),
        ("status_id" = Option<i32>, Query, description = "Only records with this status"),
        ("teacher_id" = Option<i32>, Query, description = "Only records of classes taught by this teacher")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = PaginatedDto<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Filter is outside the caller's scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(query.filter())?;

    let records = AttendanceService::new(&state.db)
        .get_filtered_paginated(filter, query.page, query.entries.max(1))
        .await?;

    Ok((StatusCode::OK, Json(records.into_dto(Attendance::into_dto))))
}

/// Create an attendance record.
///
/// A student can only be marked once per class.
///
/// # Access Control
/// - `Admin` - Any class
/// - `Teacher` - Classes they teach
///
/// # Returns
/// - `201 Created` - Record created
/// - `404 Not Found` - Schedule entry, student or status missing
/// - `409 Conflict` - Student already marked for this class
#[utoipa::path(
    post,
    path = "/api/attendances",
    tag = ATTENDANCE_TAG,
    request_body = CreateAttendanceDto,
    responses(
        (status = 201, description = "Successfully created attendance record", body = AttendanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not teach this class", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 409, description = "Student already marked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Write)
        .await?;
    access.ensure_owner(Some(schedule_teacher(&state.db, payload.schedule_id).await?), None)?;

    let attendance = AttendanceService::new(&state.db)
        .create(AttendanceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 200, description = "Successfully retrieved attendance record", body = AttendanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Record is outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Attendance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;

    let attendance = AttendanceService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Attendance", id))?;

    let teacher_id = schedule_teacher(&state.db, attendance.schedule_id).await?;
    access.ensure_owner(Some(teacher_id), Some(attendance.student_id))?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

/// Replace an attendance record.
///
/// A teacher must teach both the class the record currently belongs to and the
/// class it is moved to.
#[utoipa::path(
    put,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance record ID")),
    request_body = CreateAttendanceDto,
    responses(
        (status = 200, description = "Successfully updated attendance record", body = AttendanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not teach this class", body = ErrorDto),
        (status = 404, description = "Record or referenced row not found", body = ErrorDto),
        (status = 409, description = "Student already marked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Write)
        .await?;

    let service = AttendanceService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Attendance", id))?;
    access.ensure_owner(Some(schedule_teacher(&state.db, existing.schedule_id).await?), None)?;
    access.ensure_owner(Some(schedule_teacher(&state.db, payload.schedule_id).await?), None)?;

    let attendance = service
        .update(id, AttendanceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 204, description = "Successfully deleted attendance record"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not teach this class", body = ErrorDto),
        (status = 404, description = "Attendance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Write)
        .await?;

    let service = AttendanceService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Attendance", id))?;
    access.ensure_owner(Some(schedule_teacher(&state.db, existing.schedule_id).await?), None)?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark one student for a class at the current server time.
#[utoipa::path(
    post,
    path = "/api/attendances/mark",
    tag = ATTENDANCE_TAG,
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Successfully marked student", body = AttendanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not teach this class", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 409, description = "Student already marked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_attendance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MarkAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Write)
        .await?;
    access.ensure_owner(Some(schedule_teacher(&state.db, payload.schedule_id).await?), None)?;

    let attendance = AttendanceService::new(&state.db)
        .mark(payload.schedule_id, payload.student_id, payload.status_id)
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// Mark several students for a class with the same status.
///
/// Nothing is written if any student is missing, already marked or listed twice.
///
/// # Returns
/// - `201 Created` - Every listed student marked
/// - `404 Not Found` - Schedule entry, status or a student missing
/// - `409 Conflict` - A student is already marked or listed twice
#[utoipa::path(
    post,
    path = "/api/attendances/mark-group",
    tag = ATTENDANCE_TAG,
    request_body = MarkGroupAttendanceDto,
    responses(
        (status = 201, description = "Successfully marked students", body = Vec<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not teach this class", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 409, description = "A student is already marked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_group_attendance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MarkGroupAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Write)
        .await?;
    access.ensure_owner(Some(schedule_teacher(&state.db, payload.schedule_id).await?), None)?;

    let records = AttendanceService::new(&state.db)
        .mark_group(payload.schedule_id, payload.student_ids, payload.status_id)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dtos(records))))
}

#[utoipa::path(
    get,
    path = "/api/attendances/schedule/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = Vec<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances_by_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(AttendanceFilter {
        schedule_id: Some(id),
        ..Default::default()
    })?;

    let records = AttendanceService::new(&state.db).get_filtered(filter).await?;

    Ok((StatusCode::OK, Json(to_dtos(records))))
}

#[utoipa::path(
    get,
    path = "/api/attendances/schedule/{id}/page",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Schedule entry ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = PaginatedDto<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances_by_schedule_paginated(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(AttendanceFilter {
        schedule_id: Some(id),
        ..Default::default()
    })?;

    let records = AttendanceService::new(&state.db)
        .get_filtered_paginated(filter, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(records.into_dto(Attendance::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/attendances/schedule/{id}/info",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = Vec<AttendanceInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_info_by_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(AttendanceFilter {
        schedule_id: Some(id),
        ..Default::default()
    })?;

    let info = AttendanceService::new(&state.db)
        .get_filtered_info(filter)
        .await?;

    Ok((StatusCode::OK, Json(to_info_dtos(info))))
}

#[utoipa::path(
    get,
    path = "/api/attendances/student/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = Vec<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Student is not the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances_by_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(AttendanceFilter {
        student_id: Some(id),
        ..Default::default()
    })?;

    let records = AttendanceService::new(&state.db).get_filtered(filter).await?;

    Ok((StatusCode::OK, Json(to_dtos(records))))
}

#[utoipa::path(
    get,
    path = "/api/attendances/student/{id}/page",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Student ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = PaginatedDto<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Student is not the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances_by_student_paginated(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(AttendanceFilter {
        student_id: Some(id),
        ..Default::default()
    })?;

    let records = AttendanceService::new(&state.db)
        .get_filtered_paginated(filter, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(records.into_dto(Attendance::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/attendances/student/{id}/info",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = Vec<AttendanceInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Student is not the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_info_by_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .authorize(Resource::Attendance, Action::Read)
        .await?;
    let filter = access.restrict(AttendanceFilter {
        student_id: Some(id),
        ..Default::default()
    })?;

    let info = AttendanceService::new(&state.db)
        .get_filtered_info(filter)
        .await?;

    Ok((StatusCode::OK, Json(to_info_dtos(info))))
}

/// Get every record with the given status.
///
/// # Access Control
/// - `Admin`, `Teacher` - All records
/// - `Student` - Denied
#[utoipa::path(
    get,
    path = "/api/attendances/status/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance status ID")),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = Vec<AttendanceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may not filter by status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances_by_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::AttendanceByStatus, Action::Read)
        .await?;

    let records = AttendanceService::new(&state.db)
        .get_filtered(AttendanceFilter {
            status_id: Some(id),
            ..Default::default()
        })
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(records))))
}
