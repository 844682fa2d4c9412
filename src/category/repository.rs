use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::category::model::Category;
use crate::utils::error::StoreError;

pub const CATEGORIES_COLLECTION: &str = "categories";
pub const CATEGORY_PAGE_SIZE: i64 = 100;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: &Category) -> Result<(), StoreError>;

    /// Categories in store order, at most `limit` of them.
    async fn list(&self, limit: i64) -> Result<Vec<Category>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Category>(CATEGORIES_COLLECTION);
        MongoCategoryRepository { collection }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), StoreError> {
        self.collection.insert_one(category).await?;
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Category>, StoreError> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
