use crate::seed::service::SeedService;
use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Seed default categories and sample posts
/// POST /init-data
pub async fn initialize_data(
    seed_service: web::Data<SeedService>,
) -> Result<HttpResponse, CustomError> {
    let outcome = seed_service.initialize().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": outcome.message(),
        "httpStatusCode": 200,
        "service": service_name(),
    })))
}
