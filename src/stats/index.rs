use super::controller::get_stats;
use actix_web::web;

pub fn stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(get_stats));
}
