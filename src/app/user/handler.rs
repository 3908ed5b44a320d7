//! 用户处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use validator::Validate;

use super::model::{ListUsersQuery, User, UserPayload};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ResultResponse};

// GET /users
pub async fn get_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, CoreError> {
    let Query(query) = query?;
    let (start, count) = query.normalized();
    let users = state.user_service.get_users(start, count).await?;
    Ok(Json(users))
}

// GET /user/:id
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, CoreError> {
    let Path(id) = id?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state.user_service.create_user(&payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// PUT /user/:id
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, CoreError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state.user_service.update_user(id, &payload).await?;
    Ok(Json(user))
}

// DELETE /user/:id
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ResultResponse>, CoreError> {
    let Path(id) = id?;
    state.user_service.delete_user(id).await?;
    Ok(Json(ResultResponse::success()))
}
