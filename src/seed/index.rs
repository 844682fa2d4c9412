use super::controller::initialize_data;
use actix_web::web;

pub fn seed_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/init-data", web::post().to(initialize_data));
}
