//! Database models for goals.

use diesel::prelude::*;

/// Database model for goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GoalDB {
    pub id: i32,
    pub goal_name: String,
    pub is_success: bool,
}

/// Database model for creating a new goal. `id` is left to the sequence.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub goal_name: String,
    pub is_success: bool,
}

// Conversion to domain models
impl From<GoalDB> for goaltracker_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            goal_name: db.goal_name,
            is_success: db.is_success,
        }
    }
}

impl From<goaltracker_core::goals::NewGoal> for NewGoalDB {
    fn from(domain: goaltracker_core::goals::NewGoal) -> Self {
        Self {
            goal_name: domain.goal_name,
            is_success: domain.is_success,
        }
    }
}
