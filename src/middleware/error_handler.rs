use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result, web};
use serde_json::json;

use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;

pub fn is_json<B>(res: &ServiceResponse<B>) -> bool {
    res.response()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Malformed or missing JSON bodies become validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| CustomError::ValidationError(err.to_string()).into())
}

/// Unparseable query strings become validation errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| CustomError::ValidationError(err.to_string()).into())
}

/// Wraps any remaining plain-text error response (405, 413, ...) in the
/// standard JSON envelope.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_json(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status_code = res.response().status();
    let error_message = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| status_code.canonical_reason().unwrap_or("Unknown error").to_string());
    let error_type = status_code
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_uppercase()
        .replace(' ', "_");

    let new_response = HttpResponse::build(status_code).json(json!({
        "success": false,
        "message": error_message,
        "httpStatusCode": status_code.as_u16(),
        "error": error_type,
        "service": service_name(),
    }));
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}
