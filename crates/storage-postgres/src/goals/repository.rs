use goaltracker_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use goaltracker_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::DbExecutor;
use crate::errors::IntoCore;
use crate::schema::goals;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::debug;

/// Goal store backed by the `goals` table.
pub struct GoalRepository {
    executor: DbExecutor,
}

impl GoalRepository {
    pub fn new(executor: DbExecutor) -> Self {
        GoalRepository { executor }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn load_goals(&self) -> Result<Vec<Goal>> {
        self.executor
            .exec(|conn: &mut PgConnection| -> Result<Vec<Goal>> {
                // No ORDER BY: rows come back in storage order
                let goals_db = goals::table
                    .select(GoalDB::as_select())
                    .load::<GoalDB>(conn)
                    .into_core()?;
                debug!("Loaded {} goal(s)", goals_db.len());
                Ok(goals_db.into_iter().map(Goal::from).collect())
            })
            .await
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<i32> {
        self.executor
            .exec(move |conn: &mut PgConnection| -> Result<i32> {
                let new_goal_db: NewGoalDB = new_goal.into();
                diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(goals::id)
                    .get_result::<i32>(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<usize> {
        self.executor
            .exec(move |conn: &mut PgConnection| -> Result<usize> {
                diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn update_goal_status(&self, goal_id: i32, is_success: bool) -> Result<usize> {
        self.executor
            .exec(move |conn: &mut PgConnection| -> Result<usize> {
                diesel::update(goals::table.find(goal_id))
                    .set(goals::is_success.eq(is_success))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn ping(&self) -> Result<()> {
        self.executor
            .exec(|conn: &mut PgConnection| -> Result<()> {
                diesel::sql_query("SELECT 1").execute(conn).into_core()?;
                Ok(())
            })
            .await
    }
}
