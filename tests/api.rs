use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;
use actix_web::{App, test};
use blog_backend::category::model::Category;
use blog_backend::middleware::error_handler::handle_error;
use blog_backend::middleware::not_found::not_found;
use blog_backend::post::post_model::{Post, PostSuggestion, TagCount};
use blog_backend::router::index::routes;
use blog_backend::state::AppState;
use blog_backend::stats::model::BlogStats;
use serde_json::{Value, json};

macro_rules! init_app {
    () => {{
        let state = AppState::in_memory();
        test::init_service(
            App::new()
                .configure(|cfg| state.configure(cfg))
                .configure(routes)
                .wrap(
                    ErrorHandlers::new()
                        .handler(StatusCode::NOT_FOUND, not_found)
                        .default_handler(handle_error),
                ),
        )
        .await
    }};
}

fn post_body(title: &str, category: &str, tags: &[&str]) -> Value {
    json!({
        "title": title,
        "content": format!("Full text for {title}"),
        "excerpt": format!("Summary for {title}"),
        "category": category,
        "tags": tags,
    })
}

#[actix_web::test]
async fn health_reports_healthy() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn create_then_read_counts_views() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body("Hello World", "News", &["intro"]))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.slug, "hello-world");
    assert_eq!(created.author, "Admin");
    assert!(created.published);
    assert_eq!(created.views, 0);

    let req = test::TestRequest::get()
        .uri("/api/posts/hello-world")
        .to_request();
    let fetched: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.views, 1);
}

#[actix_web::test]
async fn missing_slug_is_a_json_404() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/posts/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "NOT_FOUND_ERROR");
    assert_eq!(body["message"], "Not Found: Post not found");
}

#[actix_web::test]
async fn unknown_route_uses_envelope() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Route does not exist");
}

#[actix_web::test]
async fn list_rejects_bad_paging() {
    let app = init_app!();

    for uri in [
        "/api/posts?limit=100",
        "/api/posts?limit=0",
        "/api/posts?skip=-1",
        "/api/posts?limit=abc",
        "/api/posts/popular?limit=21",
        "/api/posts/recent?limit=0",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR", "{uri}");
    }
}

#[actix_web::test]
async fn list_filters_and_pages() {
    let app = init_app!();
    for (title, category, tags) in [
        ("Derby recap", "News", vec!["derby"]),
        ("Transfer rumours", "News", vec!["market"]),
        ("Zico at 70", "History", vec!["zico", "derby"]),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body(title, category, &tags))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/posts?category=News")
        .to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.category == "News"));

    let req = test::TestRequest::get().uri("/api/posts?tag=derby").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/posts?search=FULL%20TEXT%20FOR%20zico")
        .to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "zico-at-70");

    let req = test::TestRequest::get().uri("/api/posts?limit=2").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 2);
}

#[actix_web::test]
async fn drafts_hidden_unless_requested() {
    let app = init_app!();
    let mut draft = post_body("Secret plans", "News", &[]);
    draft["published"] = json!(false);
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(draft)
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());

    let req = test::TestRequest::get()
        .uri("/api/posts?published=false")
        .to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);
}

#[actix_web::test]
async fn literal_routes_win_over_slug() {
    let app = init_app!();
    for title in ["First", "Second"] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body(title, "News", &[]))
            .to_request();
        test::call_service(&app, req).await;
    }
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/api/posts/first").to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/posts/popular")
        .to_request();
    let popular: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(popular.len(), 2);
    assert_eq!(popular[0].slug, "first");
    assert!(popular[0].views >= popular[1].views);

    let req = test::TestRequest::get()
        .uri("/api/posts/recent?limit=1")
        .to_request();
    let recent: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].slug, "second");
}

#[actix_web::test]
async fn update_and_delete_by_id() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body("Before", "News", &[]))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(json!({ "title": "After Edit" }))
        .to_request();
    let updated: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.slug, "after-edit");
    assert_eq!(updated.content, created.content);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Post deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(json!({ "content": "ghost" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn malformed_body_is_a_validation_error() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "No content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn categories_create_and_list() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "Match Reports", "description": "Every game" }))
        .to_request();
    let created: Category = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.slug, "match-reports");
    assert_eq!(created.color, "#FF0000");

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let categories: Vec<Category> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(categories, [created]);
}

#[actix_web::test]
async fn tags_and_suggestions() {
    let app = init_app!();
    for (title, tags) in [("Alpha", vec!["a", "b"]), ("Beta", vec!["a"])] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body(title, "News", &tags))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let tags: Vec<TagCount> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        tags,
        [
            TagCount { name: "a".into(), count: 2 },
            TagCount { name: "b".into(), count: 1 },
        ]
    );

    let req = test::TestRequest::get()
        .uri("/api/search/suggestions?q=alp")
        .to_request();
    let suggestions: Vec<PostSuggestion> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        suggestions,
        [PostSuggestion {
            title: "Alpha".into(),
            slug: "alpha".into(),
            category: "News".into(),
        }]
    );

    for uri in ["/api/search/suggestions?q=a", "/api/search/suggestions"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn init_data_is_idempotent_and_feeds_stats() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/init-data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Default data initialized successfully");

    let req = test::TestRequest::post().uri("/api/init-data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Data already initialized");

    let req = test::TestRequest::get()
        .uri("/api/posts/a-histria-gloriosa-do-clube-de-regatas-do-flamengo")
        .to_request();
    let post: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post.category, "História");

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let stats: BlogStats = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        stats,
        BlogStats {
            total_posts: 2,
            total_views: 1,
            total_categories: 5,
        }
    );
}
