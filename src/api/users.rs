//! User API endpoints
//!
//! - GET /api/user/ - All users
//! - GET /api/user/{login} - One user by login

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::middleware::{ApiError, AppState};
use crate::db::repositories::CrudRepository;
use crate::models::User;

/// GET /api/user/
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .user_repo
        .find_all()
        .await
        .map_err(ApiError::from_internal)?;

    Ok(Json(users))
}

/// GET /api/user/{login}
pub async fn find_one(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .user_repo
        .find_by_login(&login)
        .await
        .map_err(ApiError::from_internal)?
        .ok_or_else(|| ApiError::not_found("This user does not exist"))?;

    Ok(Json(user))
}
