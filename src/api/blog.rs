//! HTML pages
//!
//! - GET / - Blog front page
//! - GET /article/{slug} - Single article page

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::api::articles::ARTICLE_NOT_FOUND;
use crate::api::middleware::{ApiError, AppState};

/// GET /
pub async fn blog(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let articles = state
        .article_repo
        .find_all_ordered_by_added_at_desc()
        .await
        .map_err(ApiError::from_internal)?;

    let html = state
        .renderer
        .render_blog(&articles)
        .map_err(ApiError::from_internal)?;

    Ok(Html(html))
}

/// GET /article/{slug}
pub async fn article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    let article = state
        .article_repo
        .find_by_slug(&slug)
        .await
        .map_err(ApiError::from_internal)?
        .ok_or_else(|| ApiError::not_found(ARTICLE_NOT_FOUND))?;

    let html = state
        .renderer
        .render_article(&article)
        .map_err(ApiError::from_internal)?;

    Ok(Html(html))
}
