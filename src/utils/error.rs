use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::utils::helpers::service_name;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl CustomError {
    pub fn error_code(&self) -> &'static str {
        match *self {
            CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
            CustomError::ValidationError(..) => "VALIDATION_ERROR",
            CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": self.error_code(),
            "service": service_name(),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}

/// Failures raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),

    #[error("unexpected document shape: {0}")]
    Shape(String),
}

impl From<StoreError> for CustomError {
    fn from(err: StoreError) -> Self {
        error!("Store error: {}", err);
        CustomError::InternalServerError("Database operation failed".to_string())
    }
}
