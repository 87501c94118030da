use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use menugate_auth::{ResolveError, StoreError};
use menugate_core::DomainError;

pub fn resolve_error_to_response(err: ResolveError) -> axum::response::Response {
    match err {
        ResolveError::Store(e) => store_error_to_response(e),
        ResolveError::Domain(e) => domain_error_to_response(e),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store failure");
    match err {
        StoreError::Unavailable(msg) => json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", msg),
        StoreError::Corrupt(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_corrupt", msg),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::MalformedHierarchy { ref menu_id } => {
            tracing::error!(%menu_id, "menu hierarchy contains a cycle");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "malformed_hierarchy", err.to_string())
        }
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
