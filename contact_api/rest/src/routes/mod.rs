use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

pub mod contact;

#[derive(Serialize)]
struct ApiError {
    detail: &'static str,
}

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Answers requests whose body could not be read as a JSON object.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    debug!(%rejection, "rejected request body");
    error(StatusCode::BAD_REQUEST, "Invalid request body")
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}
