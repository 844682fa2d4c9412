use crate::category::service::CategoryService;
use crate::post::post_service::PostService;
use crate::stats::model::BlogStats;
use crate::utils::error::CustomError;
use actix_web::web;

/// Summary figures over published posts and all categories.
pub struct StatsService {
    posts: web::Data<PostService>,
    categories: web::Data<CategoryService>,
}

impl StatsService {
    pub fn new(posts: web::Data<PostService>, categories: web::Data<CategoryService>) -> Self {
        StatsService { posts, categories }
    }

    pub async fn get_stats(&self) -> Result<BlogStats, CustomError> {
        Ok(BlogStats {
            total_posts: self.posts.count_published().await?,
            total_views: self.posts.published_views().await?,
            total_categories: self.categories.count_categories().await?,
        })
    }
}
