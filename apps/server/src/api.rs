use std::sync::Arc;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod goals;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the goal store accepts connections.
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.goal_service.check_connection().await?;
    Ok("ok")
}

/// Unwraps a JSON request body that must be an object.
pub(crate) fn json_object(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Map<String, Value>> {
    match payload {
        Ok(Json(Value::Object(body))) => Ok(body),
        Ok(Json(_)) => Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(goals::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
