use std::sync::Arc;

use log::info;

use crate::category::model::Category;
use crate::category::repository::CategoryRepository;
use crate::post::post_model::Post;
use crate::post::post_repository::PostRepository;
use crate::seed::data::{default_categories, sample_posts};
use crate::utils::error::CustomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadyInitialized,
    Initialized { categories: usize, posts: usize },
}

impl SeedOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SeedOutcome::AlreadyInitialized => "Data already initialized",
            SeedOutcome::Initialized { .. } => "Default data initialized successfully",
        }
    }
}

pub struct SeedService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl SeedService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        SeedService { posts, categories }
    }

    /// Insert the default categories and sample posts unless any category
    /// exists. Only categories are checked: posts deleted later are not
    /// re-seeded while categories remain.
    pub async fn initialize(&self) -> Result<SeedOutcome, CustomError> {
        if self.categories.count().await? > 0 {
            info!("Seed skipped: categories already present");
            return Ok(SeedOutcome::AlreadyInitialized);
        }

        let categories = default_categories();
        let category_count = categories.len();
        for request in categories {
            self.categories.insert(&Category::new(request)).await?;
        }

        let posts = sample_posts();
        let post_count = posts.len();
        for request in posts {
            self.posts.insert(&Post::new(request)).await?;
        }

        info!(
            "Seeded {} categories and {} sample posts",
            category_count, post_count
        );
        Ok(SeedOutcome::Initialized {
            categories: category_count,
            posts: post_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::{InMemoryCategoryRepository, InMemoryPostRepository};
    use crate::post::post_query::PostFilter;
    use crate::utils::slug::is_valid_slug;

    struct Fixture {
        posts: Arc<InMemoryPostRepository>,
        categories: Arc<InMemoryCategoryRepository>,
        seeder: SeedService,
    }

    fn fixture() -> Fixture {
        let posts = Arc::new(InMemoryPostRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let seeder = SeedService::new(posts.clone(), categories.clone());
        Fixture {
            posts,
            categories,
            seeder,
        }
    }

    #[actix_web::test]
    async fn seeds_once() {
        let f = fixture();

        let first = f.seeder.initialize().await.unwrap();
        assert_eq!(
            first,
            SeedOutcome::Initialized {
                categories: 5,
                posts: 2
            }
        );
        assert_eq!(f.categories.count().await.unwrap(), 5);
        assert_eq!(f.posts.count(&PostFilter::default()).await.unwrap(), 2);

        let second = f.seeder.initialize().await.unwrap();
        assert_eq!(second, SeedOutcome::AlreadyInitialized);
        assert_eq!(second.message(), "Data already initialized");
        assert_eq!(f.categories.count().await.unwrap(), 5);
        assert_eq!(f.posts.count(&PostFilter::default()).await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn seeded_records_have_slugs() {
        let f = fixture();
        f.seeder.initialize().await.unwrap();

        let categories = f.categories.list(100).await.unwrap();
        assert!(categories.iter().all(|c| is_valid_slug(&c.slug)));
        assert_eq!(categories[1].slug, "jogadores");

        let total = f.posts.count(&PostFilter::default()).await.unwrap();
        assert_eq!(total, 2);
        let post = f
            .posts
            .increment_views("flamengo-conquista-mais-um-ttulo-histrico")
            .await
            .unwrap();
        assert!(post.is_some());
    }

    #[actix_web::test]
    async fn existing_category_blocks_seeding_posts() {
        let f = fixture();
        f.categories
            .insert(&Category::new(crate::category::model::CreateCategoryRequest {
                name: "Custom".into(),
                description: "Mine".into(),
                color: None,
            }))
            .await
            .unwrap();

        assert_eq!(
            f.seeder.initialize().await.unwrap(),
            SeedOutcome::AlreadyInitialized
        );
        assert_eq!(f.posts.count(&PostFilter::default()).await.unwrap(), 0);
    }
}
