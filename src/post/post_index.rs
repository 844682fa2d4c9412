use super::post_controller::{
    create_post, delete_post, get_post, get_tags, list_posts, popular_posts, recent_posts,
    search_suggestions, update_post,
};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    // Literal paths first so they are not captured by the slug wildcard
    cfg.service(
        web::scope("/posts")
            .route("", web::post().to(create_post))
            .route("", web::get().to(list_posts))
            .route("/popular", web::get().to(popular_posts))
            .route("/recent", web::get().to(recent_posts))
            .route("/{slug}", web::get().to(get_post))
            .route("/{id}", web::put().to(update_post))
            .route("/{id}", web::delete().to(delete_post)),
    );
    cfg.route("/tags", web::get().to(get_tags));
    cfg.route("/search/suggestions", web::get().to(search_suggestions));
}
