use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures reported to HTTP callers as `{"success": false, "message": ...}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Training error: {0}")]
    Training(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoData | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(_) | ApiError::Training(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.to_string(),
        }))
    }
}
