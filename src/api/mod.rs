//! API layer - HTTP handlers and routing
//!
//! - Article, user and message JSON endpoints under `/api`
//! - HTML blog pages at `/` and `/article/{slug}`

pub mod articles;
pub mod blog;
pub mod messages;
pub mod middleware;
pub mod users;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use middleware::{ApiError, AppState};

/// Build the JSON API routes
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/article/", get(articles::find_all))
        .route("/api/article/{slug}", get(articles::find_one))
        .route("/api/user/", get(users::find_all))
        .route("/api/user/{login}", get(users::find_one))
        .route("/api/message/", get(messages::greet).post(messages::post))
        .route("/api/message/list", get(messages::sample_messages))
        .route("/api/message/{id}", get(messages::find_by_id))
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/", get(blog::blog))
        .route("/article/{slug}", get(blog::article))
        .merge(build_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::db::repositories::{
        CrudRepository, SqlxArticleRepository, SqlxMessageRepository, SqlxUserRepository,
    };
    use crate::db::{create_test_pool, migrations};
    use crate::models::{Article, Message, User};
    use crate::services::MessageService;
    use crate::theme::BlogRenderer;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    async fn setup_state() -> AppState {
        let pool = create_test_pool()
            .await
            .expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        AppState {
            user_repo: SqlxUserRepository::boxed(pool.clone()),
            article_repo: SqlxArticleRepository::boxed(pool.clone()),
            message_service: Arc::new(MessageService::new(SqlxMessageRepository::boxed(pool))),
            renderer: Arc::new(
                BlogRenderer::new(BlogConfig::default()).expect("Failed to compile templates"),
            ),
        }
    }

    fn test_server(state: AppState) -> TestServer {
        let router = build_router(state, "http://localhost:3000").expect("Failed to build router");
        TestServer::new(router).expect("Failed to start test server")
    }

    /// One author with an older "Lorem" and a newer "Ipsum"
    async fn seed(state: &AppState) -> User {
        let author = state
            .user_repo
            .save(&User::new("johnDoe", "John", "Doe"))
            .await
            .expect("Failed to create user");
        let t1 = Utc.with_ymd_and_hms(2023, 3, 24, 21, 15, 36).unwrap();

        state
            .article_repo
            .save(&Article::new("Lorem", "Lorem", "Lorem content", author.clone()).with_added_at(t1))
            .await
            .expect("Failed to create article");
        state
            .article_repo
            .save(
                &Article::new("Ipsum", "Ipsum", "Ipsum content", author.clone())
                    .with_added_at(t1 + Duration::hours(1)),
            )
            .await
            .expect("Failed to create article");

        author
    }

    #[tokio::test]
    async fn test_list_articles_newest_first() {
        let state = setup_state().await;
        seed(&state).await;
        let server = test_server(state);

        let response = server.get("/api/article/").await;

        response.assert_status_ok();
        let articles = response.json::<Vec<Article>>();
        let slugs: Vec<_> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["ipsum", "lorem"]);
        assert_eq!(articles[0].author.login, "johnDoe");
    }

    #[tokio::test]
    async fn test_list_articles_empty() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/article/").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_article_wire_format() {
        let state = setup_state().await;
        seed(&state).await;
        let server = test_server(state);

        let body = server.get("/api/article/lorem").await.json::<serde_json::Value>();

        assert_eq!(body["title"], "Lorem");
        assert_eq!(body["slug"], "lorem");
        assert_eq!(body["addedAt"], "2023-03-24T21:15:36Z");
        assert_eq!(body["author"]["firstName"], "John");
        assert_eq!(body["author"]["login"], "johnDoe");
    }

    #[tokio::test]
    async fn test_unknown_article_is_404() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/article/does-not-exist").await;

        response.assert_status_not_found();
        response.assert_json(&serde_json::json!({
            "error": {"code": "NOT_FOUND", "message": "This article does not exist"}
        }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let state = setup_state().await;
        seed(&state).await;
        state
            .user_repo
            .save(&User::new("janeDoe", "Jane", "Doe"))
            .await
            .unwrap();
        let server = test_server(state);

        let users = server.get("/api/user/").await.json::<Vec<User>>();

        let logins: Vec<_> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["johnDoe", "janeDoe"]);
    }

    #[tokio::test]
    async fn test_find_user_by_login() {
        let state = setup_state().await;
        let author = seed(&state).await;
        let server = test_server(state);

        let response = server.get("/api/user/johnDoe").await;

        response.assert_status_ok();
        assert_eq!(response.json::<User>(), author);
    }

    #[tokio::test]
    async fn test_unknown_user_is_404() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/user/nobody").await;

        response.assert_status_not_found();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["message"], "This user does not exist");
    }

    #[tokio::test]
    async fn test_greeting() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/message/").add_query_param("name", "Alice").await;

        response.assert_status_ok();
        response.assert_text("Hello, Alice");
    }

    #[tokio::test]
    async fn test_greeting_requires_name() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/message/").expect_failure().await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sample_messages() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/message/list").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([
            {"id": "1", "text": "Hello!"},
            {"id": "2", "text": "Bonjour!"},
            {"id": "3", "text": "Privet!"},
        ]));
    }

    #[tokio::test]
    async fn test_post_then_fetch_message() {
        let server = test_server(setup_state().await);

        let response = server
            .post("/api/message/")
            .json(&serde_json::json!({"id": "42", "text": "The answer"}))
            .await;
        response.assert_status_ok();
        assert!(response.text().is_empty());

        let messages = server.get("/api/message/42").await.json::<Vec<Message>>();
        assert_eq!(messages, vec![Message::new("42", "The answer")]);
    }

    #[tokio::test]
    async fn test_post_message_without_id() {
        let state = setup_state().await;
        let service = state.message_service.clone();
        let server = test_server(state);

        server
            .post("/api/message/")
            .json(&serde_json::json!({"text": "Anonymous"}))
            .await
            .assert_status_ok();

        let stored = service.find_messages().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].text, "Anonymous");
        assert!(stored[0].id.is_some());
    }

    #[tokio::test]
    async fn test_post_malformed_message_is_rejected() {
        let server = test_server(setup_state().await);

        let response = server
            .post("/api/message/")
            .json(&serde_json::json!({"id": "1"}))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_message_is_empty_list() {
        let server = test_server(setup_state().await);

        let response = server.get("/api/message/missing").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_blog_page() {
        let state = setup_state().await;
        seed(&state).await;
        let server = test_server(state);

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<title>Blog</title>"));
        let ipsum = html.find("/article/ipsum").expect("ipsum missing");
        let lorem = html.find("/article/lorem").expect("lorem missing");
        assert!(ipsum < lorem);
    }

    #[tokio::test]
    async fn test_article_page() {
        let state = setup_state().await;
        seed(&state).await;
        let server = test_server(state);

        let response = server.get("/article/lorem").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Lorem content"));
        assert!(html.contains("2023-03-24 24th 2023"));
    }

    #[tokio::test]
    async fn test_unknown_article_page_is_404() {
        let server = test_server(setup_state().await);

        server
            .get("/article/nope")
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_invalid_cors_origin() {
        let state = setup_state().await;

        assert!(build_router(state, "bad\norigin").is_err());
    }
}
