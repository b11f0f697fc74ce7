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
        class_type::{ClassTypeDto, CreateClassTypeDto},
    },
    server::{
        error::{domain::DomainError, AppError},
        middleware::{
            auth::AuthGuard,
            policy::{Action, Resource},
        },
        model::class_type::ClassType,
        service::class_type::ClassTypeService,
        state::AppState,
    },
};

/// Tag for grouping class type endpoints in OpenAPI documentation
pub static CLASS_TYPE_TAG: &str = "class_type";

#[utoipa::path(
    get,
    path = "/api/class-types",
    tag = CLASS_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved class types", body = Vec<ClassTypeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::ClassTypes, Action::Read)
        .await?;

    let class_types = ClassTypeService::new(&state.db).get_all().await?;
    let dtos: Vec<ClassTypeDto> = class_types.into_iter().map(ClassType::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/class-types",
    tag = CLASS_TYPE_TAG,
    request_body = CreateClassTypeDto,
    responses(
        (status = 201, description = "Successfully created class type", body = ClassTypeDto),
        (status = 400, description = "Name empty or already taken", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClassTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::ClassTypes, Action::Write)
        .await?;

    let class_type = ClassTypeService::new(&state.db)
        .create(payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(class_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/class-types/{id}",
    tag = CLASS_TYPE_TAG,
    params(("id" = i32, Path, description = "Class type ID")),
    responses(
        (status = 200, description = "Successfully retrieved class type", body = ClassTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Class type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_type_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::ClassTypes, Action::Read)
        .await?;

    let class_type = ClassTypeService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Class type", id))?;

    Ok((StatusCode::OK, Json(class_type.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/class-types/{id}",
    tag = CLASS_TYPE_TAG,
    params(("id" = i32, Path, description = "Class type ID")),
    request_body = CreateClassTypeDto,
    responses(
        (status = 200, description = "Successfully updated class type", body = ClassTypeDto),
        (status = 400, description = "Name empty or already taken", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Class type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateClassTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::ClassTypes, Action::Write)
        .await?;

    let class_type = ClassTypeService::new(&state.db)
        .update(id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(class_type.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/class-types/{id}",
    tag = CLASS_TYPE_TAG,
    params(("id" = i32, Path, description = "Class type ID")),
    responses(
        (status = 204, description = "Successfully deleted class type"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Class type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .authorize(Resource::ClassTypes, Action::Write)
        .await?;

    ClassTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
