use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("invalid media id")]
    InvalidId,

    #[error("media file not found")]
    NotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::InvalidId => (StatusCode::BAD_REQUEST, "invalid_media_id", self.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, "media_not_found", self.to_string()),
            Self::Io(error) => {
                tracing::error!(error = %error, "media_request_failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_server_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": { "code": code, "message": message }
        }));

        (status, body).into_response()
    }
}
