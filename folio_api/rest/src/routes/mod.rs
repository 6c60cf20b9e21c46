use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiFailure, ApiFieldError};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error. Please try again later.",
        Vec::new(),
    )
}

pub fn failure(code: StatusCode, message: impl Into<String>, errors: Vec<ApiFieldError>) -> Response {
    (
        code,
        Json(ApiFailure {
            success: false,
            message: message.into(),
            errors,
        }),
    )
        .into_response()
}
