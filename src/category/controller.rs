use crate::category::model::CreateCategoryRequest;
use crate::category::service::CategoryService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};

/// List every category
/// GET /categories
pub async fn get_categories(
    category_service: web::Data<CategoryService>,
) -> Result<HttpResponse, CustomError> {
    let categories = category_service.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Create a new category
/// POST /categories
pub async fn create_category(
    category_service: web::Data<CategoryService>,
    body: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, CustomError> {
    let category = category_service.create_category(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}
