//! In-memory stores, used by the test suite and by local runs without MongoDB.
//!
//! Records live in insertion order behind an async `RwLock`. Data is lost when
//! the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::category::model::Category;
use crate::category::repository::CategoryRepository;
use crate::post::post_model::{Post, PostChanges, PostSuggestion, TagCount};
use crate::post::post_query::{PostFilter, PostQuery, contains_lowercase};
use crate::post::post_repository::{PostRepository, TAG_LIMIT};
use crate::utils::error::StoreError;

pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), StoreError> {
        self.posts.write().await.push(post.clone());
        Ok(())
    }

    async fn find(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|post| query.filter.matches(post))
            .cloned()
            .collect();
        query.sort.order(&mut matching);

        Ok(matching
            .into_iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn increment_views(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        // Lookup and increment happen under one write lock.
        let mut posts = self.posts.write().await;
        Ok(posts.iter_mut().find(|post| post.slug == slug).map(|post| {
            post.views += 1;
            post.clone()
        }))
    }

    async fn update(&self, id: &str, changes: &PostChanges) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        Ok(posts.iter_mut().find(|post| post.id == id).map(|post| {
            changes.apply(post);
            post.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        Ok(posts.len() < before)
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, StoreError> {
        let posts = self.posts.read().await;
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for tag in posts.iter().flat_map(|post| post.tags.iter()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }

        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(name, count)| TagCount {
                name: name.to_string(),
                count,
            })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        tags.truncate(TAG_LIMIT as usize);

        Ok(tags)
    }

    async fn suggestions(
        &self,
        term: &str,
        limit: i64,
    ) -> Result<Vec<PostSuggestion>, StoreError> {
        let needle = term.to_lowercase();
        let posts = self.posts.read().await;

        Ok(posts
            .iter()
            .filter(|post| post.published)
            .filter(|post| {
                contains_lowercase(&post.title, &needle)
                    || post.tags.iter().any(|tag| contains_lowercase(tag, &needle))
            })
            .take(limit as usize)
            .map(PostSuggestion::from)
            .collect())
    }

    async fn count(&self, filter: &PostFilter) -> Result<u64, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|post| filter.matches(post)).count() as u64)
    }

    async fn total_views(&self, filter: &PostFilter) -> Result<i64, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| filter.matches(post))
            .map(|post| post.views)
            .sum())
    }
}

pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), StoreError> {
        self.categories.write().await.push(category.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Category>, StoreError> {
        let categories = self.categories.read().await;
        Ok(categories.iter().take(limit as usize).cloned().collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.categories.read().await.len() as u64)
    }
}
