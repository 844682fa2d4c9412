use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::post::post_model::{Post, PostChanges, PostSuggestion, TagCount};
use crate::post::post_query::{PostFilter, PostQuery, contains_ignore_case};
use crate::utils::error::StoreError;
use crate::utils::helpers::bson_to_i64;

pub const POSTS_COLLECTION: &str = "posts";
pub const TAG_LIMIT: i64 = 100;

/// Storage seam for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: &Post) -> Result<(), StoreError>;

    async fn find(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError>;

    /// Adds one view to the post with `slug` and returns it as it is after
    /// the increment.
    async fn increment_views(&self, slug: &str) -> Result<Option<Post>, StoreError>;

    async fn update(&self, id: &str, changes: &PostChanges) -> Result<Option<Post>, StoreError>;

    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Posts per tag across every post, most used first.
    async fn tag_counts(&self) -> Result<Vec<TagCount>, StoreError>;

    /// Published posts whose title or one of whose tags contains `term`.
    async fn suggestions(
        &self,
        term: &str,
        limit: i64,
    ) -> Result<Vec<PostSuggestion>, StoreError>;

    async fn count(&self, filter: &PostFilter) -> Result<u64, StoreError>;

    async fn total_views(&self, filter: &PostFilter) -> Result<i64, StoreError>;
}

pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Post>(POSTS_COLLECTION);
        MongoPostRepository { collection }
    }

    async fn aggregate_documents(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection.aggregate(pipeline).await?;
        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), StoreError> {
        self.collection.insert_one(post).await?;
        Ok(())
    }

    async fn find(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        let cursor = self
            .collection
            .find(query.filter.to_document())
            .sort(query.sort.to_document())
            .skip(query.skip)
            .limit(query.limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn increment_views(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let post = self
            .collection
            .find_one_and_update(doc! { "slug": slug }, doc! { "$inc": { "views": 1_i64 } })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(post)
    }

    async fn update(&self, id: &str, changes: &PostChanges) -> Result<Option<Post>, StoreError> {
        let set = bson::to_document(changes)?;

        let post = self
            .collection
            .find_one_and_update(doc! { "id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, StoreError> {
        let pipeline = vec![
            doc! { "$unwind": "$tags" },
            doc! { "$group": { "_id": "$tags", "count": { "$sum": 1 } } },
            doc! { "$sort": { "count": -1, "_id": 1 } },
            doc! { "$limit": TAG_LIMIT },
        ];

        self.aggregate_documents(pipeline)
            .await?
            .iter()
            .map(|group| -> Result<TagCount, StoreError> {
                let name = group
                    .get_str("_id")
                    .map_err(|e| StoreError::Shape(e.to_string()))?
                    .to_string();
                let count = bson_to_i64(group.get("count"))?;
                Ok(TagCount { name, count })
            })
            .collect()
    }

    async fn suggestions(
        &self,
        term: &str,
        limit: i64,
    ) -> Result<Vec<PostSuggestion>, StoreError> {
        let pipeline = vec![
            doc! {
                "$match": {
                    "$or": [
                        { "title": contains_ignore_case(term) },
                        { "tags": contains_ignore_case(term) },
                    ],
                    "published": true,
                }
            },
            doc! { "$project": { "_id": 0, "title": 1, "slug": 1, "category": 1 } },
            doc! { "$limit": limit },
        ];

        self.aggregate_documents(pipeline)
            .await?
            .into_iter()
            .map(|projected| {
                bson::from_document::<PostSuggestion>(projected).map_err(StoreError::from)
            })
            .collect()
    }

    async fn count(&self, filter: &PostFilter) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn total_views(&self, filter: &PostFilter) -> Result<i64, StoreError> {
        let pipeline = vec![
            doc! { "$match": filter.to_document() },
            doc! { "$group": { "_id": null, "total": { "$sum": "$views" } } },
        ];

        match self.aggregate_documents(pipeline).await?.first() {
            Some(totals) => bson_to_i64(totals.get("total")),
            None => Ok(0),
        }
    }
}
