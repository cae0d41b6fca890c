//! Wire types for the JSON API and the coercion rules applied to request bodies.

use goaltracker_core::goals::{Goal, NewGoal};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// `{status}` envelope, with `message` on errors.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusBody {
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct GoalList {
    pub goals: Vec<Goal>,
}

#[derive(Serialize, Debug, Clone)]
pub struct GoalCreated {
    pub status: &'static str,
    pub goal: String,
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub goal_id: i32,
}

/// Body of `POST /add_goal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGoalRequest {
    pub goal_name: String,
    pub is_success: bool,
}

impl AddGoalRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ApiError> {
        let goal_name = match body.get("goal_name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => return Err(ApiError::BadRequest("Missing goal_name".to_string())),
        };
        let is_success = body.get("is_success").map(is_truthy).unwrap_or(false);
        Ok(Self {
            goal_name,
            is_success,
        })
    }
}

impl From<AddGoalRequest> for NewGoal {
    fn from(req: AddGoalRequest) -> Self {
        NewGoal::new(req.goal_name).with_status(req.is_success)
    }
}

/// Body of `POST /remove_goal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveGoalRequest {
    pub goal_id: i32,
}

impl RemoveGoalRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ApiError> {
        body.get("goal_id")
            .and_then(coerce_goal_id)
            .map(|goal_id| Self { goal_id })
            .ok_or_else(|| ApiError::BadRequest("Invalid or missing goal_id".to_string()))
    }
}

/// Body of `POST /update_goal_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateGoalStatusRequest {
    pub goal_id: i32,
    pub is_success: bool,
}

impl UpdateGoalStatusRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ApiError> {
        let (raw_id, raw_status) = match (present(body, "goal_id"), present(body, "is_success")) {
            (Some(id), Some(status)) => (id, status),
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing goal_id or status".to_string(),
                ))
            }
        };
        let goal_id = exact_goal_id(raw_id)
            .ok_or_else(|| ApiError::BadRequest("Invalid goal_id".to_string()))?;
        let is_success = parse_bool(raw_status)
            .ok_or_else(|| ApiError::BadRequest("Invalid is_success".to_string()))?;
        Ok(Self {
            goal_id,
            is_success,
        })
    }
}

/// Present and not `null`.
fn present<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|v| !v.is_null())
}

/// Truthiness of a JSON value: null, false, zero, and empty strings/arrays/objects are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// A JSON boolean, or a string PostgreSQL accepts as a boolean literal:
/// `t`/`true`/`y`/`yes`/`on`/`1` and `f`/`false`/`n`/`no`/`off`/`0`,
/// case-insensitive, surrounding whitespace ignored, unique prefixes allowed.
pub fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => {
            let literal = s.trim().to_ascii_lowercase();
            let is_prefix_of = |word: &str| !literal.is_empty() && word.starts_with(&literal);
            match literal.as_str() {
                "1" => Some(true),
                "0" => Some(false),
                "on" => Some(true),
                "of" | "off" => Some(false),
                _ if is_prefix_of("true") || is_prefix_of("yes") => Some(true),
                _ if is_prefix_of("false") || is_prefix_of("no") => Some(false),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Accepts a JSON integer, a finite number (truncated toward zero), or a
/// string holding a base-10 integer. Values outside the id column range are rejected.
pub fn coerce_goal_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(f64::trunc)
                    .filter(|f| *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                    .map(|f| f as i32)
            }
        }
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Like [`coerce_goal_id`] but never rounds: fractional numbers name no row.
pub fn exact_goal_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) if n.as_i64().is_none() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .and_then(|_| coerce_goal_id(value)),
        Value::Number(_) | Value::String(_) => coerce_goal_id(value),
        _ => None,
    }
}
