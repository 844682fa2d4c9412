use crate::utils::helpers::service_name;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Liveness probe
/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": service_name(),
    }))
}
