use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error surface of the public API. Every failure becomes the site's
/// `{success: false, message}` contract; transport errors carry the source
/// description through to the caller.
#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    MailError(atlas_reserve::MailError),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::MailError(err) => {
                tracing::error!("Erreur lors de l'envoi de l'email: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Erreur lors de l'envoi de l'email: {}", err),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erreur lors de l'envoi de l'email: Erreur inconnue".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<atlas_reserve::MailError> for AppError {
    fn from(err: atlas_reserve::MailError) -> Self {
        Self::MailError(err)
    }
}

impl From<atlas_reserve::ValidationError> for AppError {
    fn from(err: atlas_reserve::ValidationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
