//! Article API endpoints
//!
//! - GET /api/article/ - All articles, newest first
//! - GET /api/article/{slug} - One article by slug

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::middleware::{ApiError, AppState};
use crate::models::Article;

pub(crate) const ARTICLE_NOT_FOUND: &str = "This article does not exist";

/// GET /api/article/
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state
        .article_repo
        .find_all_ordered_by_added_at_desc()
        .await
        .map_err(ApiError::from_internal)?;

    Ok(Json(articles))
}

/// GET /api/article/{slug}
pub async fn find_one(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .article_repo
        .find_by_slug(&slug)
        .await
        .map_err(ApiError::from_internal)?
        .ok_or_else(|| ApiError::not_found(ARTICLE_NOT_FOUND))?;

    Ok(Json(article))
}
