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
        group::{CreateGroupDto, GroupDto},
    },
    server::{
        controller::PaginationParams,
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::group::{Group, GroupParams},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Get paginated groups ordered by name.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved groups", body = PaginatedDto<GroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Groups, Action::Read)
        .await?;

    let groups = GroupService::new(&state.db)
        .get_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(groups.into_dto(Group::into_dto))))
}

/// Create a group.
///
/// # Returns
/// - `201 Created` - Group created
/// - `400 Bad Request` - Maximum not positive or name already taken
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Groups, Action::Write)
        .await?;

    let group = GroupService::new(&state.db)
        .create(GroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Groups, Action::Read)
        .await?;

    let group = GroupService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Group", id))?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/groups/name/{name}",
    tag = GROUP_TAG,
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_by_name(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Groups, Action::Read)
        .await?;

    let group = GroupService::new(&state.db)
        .get_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group not found with name: {}", name)))?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Update a group's name, year and maximum.
///
/// The maximum cannot be lowered below the number of students already enrolled.
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Groups, Action::Write)
        .await?;

    let group = GroupService::new(&state.db)
        .update(id, GroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete an empty group together with its schedule entries.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Successfully deleted group"),
        (status = 400, description = "Group still has students", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::Groups, Action::Write)
        .await?;

    GroupService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
