//! Turns request parameters into a store-agnostic post query.
//!
//! Bounds are checked here and violations rejected with a validation error;
//! nothing is clamped. Each backend then interprets a [`PostQuery`] itself:
//! MongoDB through [`PostFilter::to_document`], the in-memory store through
//! [`PostFilter::matches`].

use mongodb::bson::{Document, doc};
use serde::Deserialize;

use crate::post::post_model::Post;
use crate::utils::error::CustomError;

pub const DEFAULT_PAGE_SIZE: i64 = 12;
pub const MAX_PAGE_SIZE: i64 = 50;
pub const DEFAULT_HIGHLIGHT_SIZE: i64 = 5;
pub const MAX_HIGHLIGHT_SIZE: i64 = 20;
pub const SUGGESTION_LIMIT: i64 = 5;
pub const SUGGESTION_MIN_LENGTH: usize = 2;

/// Query string accepted by `GET /posts`.
#[derive(Debug, Deserialize, Default)]
pub struct ListPostsParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub published: Option<bool>,
}

/// Query string accepted by `GET /posts/popular` and `GET /posts/recent`.
#[derive(Debug, Deserialize, Default)]
pub struct HighlightParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub q: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub published_only: bool,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    Newest,
    MostViewed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub filter: PostFilter,
    pub sort: PostSort,
    pub skip: u64,
    pub limit: i64,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn bounded_limit(limit: Option<i64>, default: i64, max: i64) -> Result<i64, CustomError> {
    let limit = limit.unwrap_or(default);
    if !(1..=max).contains(&limit) {
        return Err(CustomError::ValidationError(format!(
            "limit must be between 1 and {}",
            max
        )));
    }
    Ok(limit)
}

impl ListPostsParams {
    pub fn into_query(self) -> Result<PostQuery, CustomError> {
        let limit = bounded_limit(self.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)?;
        let skip = self.skip.unwrap_or(0);
        if skip < 0 {
            return Err(CustomError::ValidationError(
                "skip must be greater than or equal to 0".into(),
            ));
        }

        Ok(PostQuery {
            filter: PostFilter {
                published_only: self.published.unwrap_or(true),
                category: non_empty(self.category),
                tag: non_empty(self.tag),
                search: non_empty(self.search),
            },
            sort: PostSort::Newest,
            skip: skip as u64,
            limit,
        })
    }
}

impl HighlightParams {
    pub fn popular(self) -> Result<PostQuery, CustomError> {
        self.highlight(PostSort::MostViewed)
    }

    pub fn recent(self) -> Result<PostQuery, CustomError> {
        self.highlight(PostSort::Newest)
    }

    fn highlight(self, sort: PostSort) -> Result<PostQuery, CustomError> {
        Ok(PostQuery {
            filter: PostFilter::published(),
            sort,
            skip: 0,
            limit: bounded_limit(self.limit, DEFAULT_HIGHLIGHT_SIZE, MAX_HIGHLIGHT_SIZE)?,
        })
    }
}

impl SuggestionParams {
    /// The search text, once it is long enough to be worth matching.
    pub fn into_term(self) -> Result<String, CustomError> {
        if self.q.chars().count() < SUGGESTION_MIN_LENGTH {
            return Err(CustomError::ValidationError(format!(
                "q must be at least {} characters long",
                SUGGESTION_MIN_LENGTH
            )));
        }
        Ok(self.q)
    }
}

/// Case-insensitive literal `$regex` condition.
pub fn contains_ignore_case(term: &str) -> Document {
    doc! { "$regex": regex::escape(term), "$options": "i" }
}

pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl PostFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Default::default()
        }
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if self.published_only {
            filter.insert("published", true);
        }
        if let Some(category) = &self.category {
            filter.insert("category", category.as_str());
        }
        if let Some(tag) = &self.tag {
            filter.insert("tags", doc! { "$in": [tag.as_str()] });
        }
        if let Some(search) = &self.search {
            filter.insert(
                "$or",
                vec![
                    doc! { "title": contains_ignore_case(search) },
                    doc! { "content": contains_ignore_case(search) },
                    doc! { "excerpt": contains_ignore_case(search) },
                ],
            );
        }
        filter
    }

    pub fn matches(&self, post: &Post) -> bool {
        if self.published_only && !post.published {
            return false;
        }
        if let Some(category) = &self.category {
            if post.category != *category {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !post.tags.contains(tag) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            return contains_lowercase(&post.title, &needle)
                || contains_lowercase(&post.content, &needle)
                || contains_lowercase(&post.excerpt, &needle);
        }
        true
    }
}

impl PostSort {
    pub fn to_document(self) -> Document {
        match self {
            PostSort::Newest => doc! { "created_at": -1 },
            PostSort::MostViewed => doc! { "views": -1, "created_at": -1 },
        }
    }

    pub fn order(self, posts: &mut [Post]) {
        match self {
            PostSort::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            PostSort::MostViewed => posts.sort_by(|a, b| {
                b.views
                    .cmp(&a.views)
                    .then_with(|| b.created_at.cmp(&a.created_at))
            }),
        }
    }
}
