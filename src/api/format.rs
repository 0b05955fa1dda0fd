use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// Serialize a body the way every endpoint writes it: pretty-printed with
/// 2-space indentation.
pub fn to_pretty<T: Serialize>(body: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(body)
}

/// Build an application/json response with the given status and a
/// pretty-printed body.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match to_pretty(body) {
        Ok(text) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": true,
                    "message": "Failed to format response",
                    "code": "INTERNAL_SERVER_ERROR"
                })),
            )
                .into_response()
        }
    }
}

/// 200 with the matched/created payload
pub fn json_ok<T: Serialize>(body: &T) -> Response {
    json_response(StatusCode::OK, body)
}

/// 404 with the (empty) payload still serialized as the body. Absent or
/// empty results are a first-class outcome, not an error: callers branch
/// on body shape as well as status.
pub fn json_not_found<T: Serialize>(body: &T) -> Response {
    json_response(StatusCode::NOT_FOUND, body)
}
