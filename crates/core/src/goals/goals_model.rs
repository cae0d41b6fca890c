//! Goals domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub id: i32,
    pub goal_name: String,
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
}

/// Input model for creating a new goal. The id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGoal {
    pub goal_name: String,
    #[serde(default)]
    pub is_success: bool,
}

impl NewGoal {
    pub fn new(goal_name: impl Into<String>) -> Self {
        Self {
            goal_name: goal_name.into(),
            is_success: false,
        }
    }

    pub fn with_status(mut self, is_success: bool) -> Self {
        self.is_success = is_success;
        self
    }
}
