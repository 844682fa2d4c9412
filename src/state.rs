//! Services shared by every worker.

use std::sync::Arc;

use actix_web::web;

use crate::category::repository::{CategoryRepository, MongoCategoryRepository};
use crate::category::service::CategoryService;
use crate::database::Database;
use crate::database::memory::{InMemoryCategoryRepository, InMemoryPostRepository};
use crate::middleware::error_handler::{json_config, query_config};
use crate::post::post_repository::{MongoPostRepository, PostRepository};
use crate::post::post_service::PostService;
use crate::seed::service::SeedService;
use crate::stats::service::StatsService;

#[derive(Clone)]
pub struct AppState {
    pub posts: web::Data<PostService>,
    pub categories: web::Data<CategoryService>,
    pub stats: web::Data<StatsService>,
    pub seed: web::Data<SeedService>,
}

impl AppState {
    pub fn new(
        post_repository: Arc<dyn PostRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        let posts = web::Data::new(PostService::new(post_repository.clone()));
        let categories = web::Data::new(CategoryService::new(category_repository.clone()));
        let stats = web::Data::new(StatsService::new(posts.clone(), categories.clone()));
        let seed = web::Data::new(SeedService::new(post_repository, category_repository));

        Self {
            posts,
            categories,
            stats,
            seed,
        }
    }

    pub fn with_mongo(database: &Database) -> Self {
        Self::new(
            Arc::new(MongoPostRepository::new(database.handle())),
            Arc::new(MongoCategoryRepository::new(database.handle())),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryCategoryRepository::new()),
        )
    }

    /// Register services and extractor settings on an app.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.posts.clone())
            .app_data(self.categories.clone())
            .app_data(self.stats.clone())
            .app_data(self.seed.clone())
            .app_data(json_config())
            .app_data(query_config());
    }
}
