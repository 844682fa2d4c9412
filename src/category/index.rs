use super::controller::{create_category, get_categories};
use actix_web::web;

pub fn category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(get_categories))
            .route("", web::post().to(create_category)),
    );
}
