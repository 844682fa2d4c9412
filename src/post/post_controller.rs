use crate::post::post_model::{CreatePostRequest, UpdatePostRequest};
use crate::post::post_query::{HighlightParams, ListPostsParams, SuggestionParams};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;
use actix_web::{HttpResponse, web};
use serde_json::json;

pub async fn create_post(
    post_service: web::Data<PostService>,
    post: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let inserted_post = post_service.create_post(post.into_inner()).await?;
    Ok(HttpResponse::Ok().json(inserted_post))
}

pub async fn list_posts(
    post_service: web::Data<PostService>,
    params: web::Query<ListPostsParams>,
) -> Result<HttpResponse, CustomError> {
    let query = params.into_inner().into_query()?;
    let posts = post_service.list_posts(&query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

pub async fn popular_posts(
    post_service: web::Data<PostService>,
    params: web::Query<HighlightParams>,
) -> Result<HttpResponse, CustomError> {
    let query = params.into_inner().popular()?;
    let posts = post_service.list_posts(&query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

pub async fn recent_posts(
    post_service: web::Data<PostService>,
    params: web::Query<HighlightParams>,
) -> Result<HttpResponse, CustomError> {
    let query = params.into_inner().recent()?;
    let posts = post_service.list_posts(&query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

pub async fn get_post(
    slug: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_post_by_slug(&slug.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn update_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service
        .update_post(&post_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn delete_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    post_service.delete_post(&post_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Post deleted successfully",
        "httpStatusCode": 200,
        "service": service_name(),
    })))
}

/// Tag usage counts
/// GET /tags
pub async fn get_tags(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let tags = post_service.tag_counts().await?;
    Ok(HttpResponse::Ok().json(tags))
}

/// Title and tag matches for the search box
/// GET /search/suggestions?q=
pub async fn search_suggestions(
    post_service: web::Data<PostService>,
    params: web::Query<SuggestionParams>,
) -> Result<HttpResponse, CustomError> {
    let term = params.into_inner().into_term()?;
    let suggestions = post_service.search_suggestions(&term).await?;
    Ok(HttpResponse::Ok().json(suggestions))
}
