use crate::stats::service::StatsService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};

/// Blog statistics
/// GET /stats
pub async fn get_stats(
    stats_service: web::Data<StatsService>,
) -> Result<HttpResponse, CustomError> {
    let stats = stats_service.get_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
