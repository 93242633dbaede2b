//! HTTP routes for user records.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, instrument};

use userstore_core::{CreateUser, UpdateUser, User, UserId, UserStore};

use crate::error::ApiError;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub user_id: UserId,
}

/// Build the application router over `store`.
pub fn router(store: Arc<dyn UserStore>, request_timeout: Duration) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(now))
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

async fn now() -> String {
    Utc::now().to_rfc3339()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<UserId, User>>, ApiError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

#[instrument(skip_all)]
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;
    let user_id = state.store.create(request).await?;
    debug!(%user_id, "User created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { user_id })))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.get(&UserId::new(id)).await?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    state.store.update(&UserId::new(id), request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
