use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::utils::slug::create_slug;
use crate::utils::timestamp;

pub const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub published: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub views: i64,
}

impl Post {
    /// Build a fresh record: new id, derived slug, zero views.
    pub fn new(request: CreatePostRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            slug: create_slug(&request.title),
            title: request.title,
            content: request.content,
            excerpt: request.excerpt,
            author: DEFAULT_AUTHOR.to_string(),
            category: request.category,
            tags: request.tags,
            image_url: request.image_url,
            published: request.published,
            created_at: now,
            updated_at: now,
            views: 0,
        }
    }
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

/// Partial update payload. A missing field leaves the stored value alone;
/// `image_url: null` clears the image.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
    pub published: Option<bool>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Field assignments resolved from an [`UpdatePostRequest`], ready to be
/// applied by a store. Serializes to the body of a `$set` stage.
#[derive(Debug, Serialize, Clone)]
pub struct PostChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl PostChanges {
    pub fn from_request(request: UpdatePostRequest, now: DateTime<Utc>) -> Self {
        Self {
            slug: request.title.as_deref().map(create_slug),
            title: request.title,
            content: request.content,
            excerpt: request.excerpt,
            category: request.category,
            tags: request.tags,
            image_url: request.image_url,
            published: request.published,
            updated_at: now,
        }
    }

    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            post.slug = slug.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt = excerpt.clone();
        }
        if let Some(category) = &self.category {
            post.category = category.clone();
        }
        if let Some(tags) = &self.tags {
            post.tags = tags.clone();
        }
        if let Some(image_url) = &self.image_url {
            post.image_url = image_url.clone();
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        post.updated_at = self.updated_at;
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TagCount {
    pub name: String,
    pub count: i64,
}

/// Lightweight projection returned by the search suggestions endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostSuggestion {
    pub title: String,
    pub slug: String,
    pub category: String,
}

impl From<&Post> for PostSuggestion {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            category: post.category.clone(),
        }
    }
}
