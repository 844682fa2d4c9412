use std::sync::Arc;

use log::info;

use crate::category::model::{Category, CreateCategoryRequest};
use crate::category::repository::{CATEGORY_PAGE_SIZE, CategoryRepository};
use crate::utils::error::CustomError;
use crate::utils::slug::create_slug;

pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        CategoryService { repository }
    }

    /// Create a category; the slug is derived from the name.
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, CustomError> {
        if request.name.trim().is_empty() {
            return Err(CustomError::ValidationError(
                "Category name cannot be empty".to_string(),
            ));
        }
        if create_slug(&request.name).is_empty() {
            return Err(CustomError::ValidationError(
                "Category name must contain at least one letter or digit".to_string(),
            ));
        }

        let category = Category::new(request);
        self.repository.insert(&category).await?;
        info!("Created category {} ({})", category.name, category.id);

        Ok(category)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, CustomError> {
        Ok(self.repository.list(CATEGORY_PAGE_SIZE).await?)
    }

    pub async fn count_categories(&self) -> Result<u64, CustomError> {
        Ok(self.repository.count().await?)
    }
}
