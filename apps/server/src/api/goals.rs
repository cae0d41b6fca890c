use std::sync::Arc;

use crate::{
    api::json_object,
    error::ApiResult,
    main_lib::AppState,
    models::{
        AddGoalRequest, GoalCreated, GoalList, RemoveGoalRequest, StatusBody,
        UpdateGoalStatusRequest, STATUS_SUCCESS,
    },
    render::IndexView,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

/// Page shell only; the client fills the list from `/get_goals`.
async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let page = state.renderer.render_index(&IndexView::default())?;
    Ok(Html(page))
}

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalList>> {
    let goals = state.goal_service.get_goals().await.inspect_err(|e| {
        tracing::error!("Error loading goals: {}", e);
    })?;
    Ok(Json(GoalList { goals }))
}

async fn add_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<GoalCreated>> {
    let req = AddGoalRequest::from_body(&json_object(payload)?)?;
    let goal = req.goal_name.clone();
    let is_success = req.is_success;
    let goal_id = state
        .goal_service
        .create_goal(req.into())
        .await
        .inspect_err(|e| tracing::error!("Error in /add_goal: {}", e))?;
    Ok(Json(GoalCreated {
        status: STATUS_SUCCESS,
        goal,
        is_success,
        goal_id,
    }))
}

async fn remove_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<StatusBody>> {
    let req = RemoveGoalRequest::from_body(&json_object(payload)?)?;
    state
        .goal_service
        .delete_goal(req.goal_id)
        .await
        .inspect_err(|e| tracing::error!("Error removing goal {}: {}", req.goal_id, e))?;
    Ok(Json(StatusBody::success()))
}

async fn update_goal_status(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<StatusBody>> {
    let req = UpdateGoalStatusRequest::from_body(&json_object(payload)?)?;
    state
        .goal_service
        .update_goal_status(req.goal_id, req.is_success)
        .await
        .inspect_err(|e| tracing::error!("Error updating goal status: {}", e))?;
    Ok(Json(StatusBody::success()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/get_goals", get(get_goals))
        .route("/add_goal", post(add_goal))
        .route("/remove_goal", post(remove_goal))
        .route("/update_goal_status", post(update_goal_status))
}
