//! Application errors and their HTTP representation.
//!
//! Services return `AppError`; handlers return it unchanged and axum turns it into a
//! response through `IntoResponse`. Every response body is an `ErrorDto`.

pub mod auth;
pub mod config;
pub mod domain;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, domain::DomainError, internal::InternalError,
    },
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid environment configuration at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// 401 / 403, mapped by `AuthError` itself.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected business rule (missing reference, schedule conflict, full group,
    /// duplicate attendance, inverted time range), mapped by `DomainError` itself.
    #[error(transparent)]
    DomainErr(#[from] DomainError),

    /// A stored value could not be interpreted.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Binding the listener or serving failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the message shown to the client.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the message shown to the client.
    #[error("{0}")]
    BadRequest(String),

    /// 500. The message is only logged.
    #[error("{0}")]
    InternalError(String),
}

/// Builds the JSON error body used by every failing response.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::DomainErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            err => {
                tracing::error!("Internal error: {}", err);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
