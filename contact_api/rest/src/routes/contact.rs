use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use contact_core_form_contracts::{ContactFormProcessError, ContactFormService};
use contact_models::form::FormData;

use super::invalid_body;

pub fn router(service: Arc<impl ContactFormService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/contact/validate", routing::post(validate))
        .route("/contact/fields", routing::get(field_configuration))
        .with_state(service)
}

async fn field_configuration(service: State<Arc<impl ContactFormService>>) -> Response {
    Json(service.field_configuration()).into_response()
}

/// Validates the form as `POST /contact` would see it, i.e. after sanitizing.
async fn validate(
    service: State<Arc<impl ContactFormService>>,
    form: Result<Json<FormData>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_body(rejection),
    };

    Json(service.validate(&service.sanitize(&form))).into_response()
}

async fn submit(
    service: State<Arc<impl ContactFormService>>,
    form: Result<Json<FormData>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_body(rejection),
    };

    match service.process(form).await {
        Ok(result) if result.success => Json(result).into_response(),
        Ok(result) => (StatusCode::BAD_GATEWAY, Json(result)).into_response(),
        Err(ContactFormProcessError::Invalid(validation)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(validation)).into_response()
        }
    }
}
