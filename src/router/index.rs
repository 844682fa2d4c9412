use crate::category::index::category_routes;
use crate::post::post_index::post_routes;
use crate::router::health::health_check;
use crate::seed::index::seed_routes;
use crate::stats::index::stats_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(post_routes)
            .configure(category_routes)
            .configure(stats_routes)
            .configure(seed_routes)
            .route("/health", web::get().to(health_check)),
    );
}
