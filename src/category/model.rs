use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::slug::create_slug;
use crate::utils::timestamp;

pub const DEFAULT_COLOR: &str = "#FF0000";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(request: CreateCategoryRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slug: create_slug(&request.name),
            name: request.name,
            description: request.description,
            color: request.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
}
