use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlogStats {
    pub total_posts: u64,
    pub total_views: i64,
    pub total_categories: u64,
}
