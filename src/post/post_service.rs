use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

use crate::post::post_model::{
    CreatePostRequest, Post, PostChanges, PostSuggestion, TagCount, UpdatePostRequest,
};
use crate::post::post_query::{PostFilter, PostQuery, SUGGESTION_LIMIT};
use crate::post::post_repository::PostRepository;
use crate::utils::error::CustomError;
use crate::utils::slug::create_slug;

pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

fn not_found() -> CustomError {
    CustomError::NotFoundError("Post not found".into())
}

fn validate_title(title: &str) -> Result<(), CustomError> {
    if title.trim().is_empty() {
        return Err(CustomError::ValidationError("Title cannot be empty".into()));
    }
    if create_slug(title).is_empty() {
        return Err(CustomError::ValidationError(
            "Title must contain at least one letter or digit".into(),
        ));
    }
    Ok(())
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        PostService { repository }
    }

    pub async fn create_post(&self, request: CreatePostRequest) -> Result<Post, CustomError> {
        validate_title(&request.title)?;

        let post = Post::new(request);
        self.repository.insert(&post).await?;
        info!("Created post {} ({})", post.slug, post.id);

        Ok(post)
    }

    /// Run a composed list, popular or recent query.
    pub async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, CustomError> {
        debug!("Listing posts with {:?}", query);
        Ok(self.repository.find(query).await?)
    }

    /// Fetch a post for reading. Every successful fetch counts as a view.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Post, CustomError> {
        self.repository
            .increment_views(slug)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update_post(
        &self,
        id: &str,
        request: UpdatePostRequest,
    ) -> Result<Post, CustomError> {
        if let Some(title) = &request.title {
            validate_title(title)?;
        }

        let changes = PostChanges::from_request(request, Utc::now());
        let post = self
            .repository
            .update(id, &changes)
            .await?
            .ok_or_else(not_found)?;
        info!("Updated post {} ({})", post.slug, post.id);

        Ok(post)
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), CustomError> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }
        info!("Deleted post {}", id);
        Ok(())
    }

    pub async fn tag_counts(&self) -> Result<Vec<TagCount>, CustomError> {
        Ok(self.repository.tag_counts().await?)
    }

    /// `term` must already have passed the minimum length check.
    pub async fn search_suggestions(
        &self,
        term: &str,
    ) -> Result<Vec<PostSuggestion>, CustomError> {
        Ok(self.repository.suggestions(term, SUGGESTION_LIMIT).await?)
    }

    pub async fn count_published(&self) -> Result<u64, CustomError> {
        Ok(self.repository.count(&PostFilter::published()).await?)
    }

    pub async fn published_views(&self) -> Result<i64, CustomError> {
        Ok(self.repository.total_views(&PostFilter::published()).await?)
    }
}
