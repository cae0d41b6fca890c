#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use goaltracker_core::errors::{DatabaseError, Error, Result};
use goaltracker_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use goaltracker_server::{
    api::app_router,
    build_state_with_store,
    config::{Config, DatabaseConfig},
};
use serde_json::Value;
use tower::ServiceExt;

/// Goal store kept in memory, with ids handed out like a sequence.
#[derive(Default)]
pub struct InMemoryGoalRepository {
    rows: RwLock<Vec<Goal>>,
    last_id: RwLock<i32>,
    offline: bool,
    failure: Option<String>,
}

impl InMemoryGoalRepository {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    /// Reachable, but every statement fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<Goal> {
        self.rows.read().unwrap().clone()
    }

    fn connect(&self) -> Result<()> {
        if self.offline {
            return Err(Error::Database(DatabaseError::ConnectionFailed(
                "connection refused".to_string(),
            )));
        }
        if let Some(message) = &self.failure {
            return Err(Error::Database(DatabaseError::QueryFailed(message.clone())));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    async fn load_goals(&self) -> Result<Vec<Goal>> {
        self.connect()?;
        Ok(self.rows())
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<i32> {
        self.connect()?;
        let mut last_id = self.last_id.write().unwrap();
        *last_id += 1;
        self.rows.write().unwrap().push(Goal {
            id: *last_id,
            goal_name: new_goal.goal_name,
            is_success: new_goal.is_success,
        });
        Ok(*last_id)
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<usize> {
        self.connect()?;
        let mut rows = self.rows.write().unwrap();
        let before = rows.len();
        rows.retain(|g| g.id != goal_id);
        Ok(before - rows.len())
    }

    async fn update_goal_status(&self, goal_id: i32, is_success: bool) -> Result<usize> {
        self.connect()?;
        let mut rows = self.rows.write().unwrap();
        let mut updated = 0;
        for goal in rows.iter_mut().filter(|g| g.id == goal_id) {
            goal.is_success = is_success;
            updated += 1;
        }
        Ok(updated)
    }

    async fn ping(&self) -> Result<()> {
        self.connect()
    }
}

pub fn test_config(static_dir: &str) -> Config {
    Config {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        static_dir: static_dir.to_string(),
        app_version: "9.9.9".to_string(),
        db: DatabaseConfig {
            username: "tester".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 5432,
            name: "goals".to_string(),
        },
        db_checkout_timeout: Duration::from_secs(1),
    }
}

pub fn build_app(repo: Arc<InMemoryGoalRepository>) -> Router {
    build_app_with_static(repo, "static")
}

pub fn build_app_with_static(repo: Arc<InMemoryGoalRepository>, static_dir: &str) -> Router {
    let config = test_config(static_dir);
    let state = build_state_with_store(&config, repo).unwrap();
    app_router(state, &config)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &payload.to_string()).await
}
