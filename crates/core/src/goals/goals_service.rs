use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result, ValidationError};

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals().await
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<i32> {
        if new_goal.goal_name.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "goal_name".to_string(),
            )));
        }
        let goal_id = self.goal_repo.insert_new_goal(new_goal).await?;
        debug!("Created goal {}", goal_id);
        Ok(goal_id)
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<()> {
        let removed = self.goal_repo.delete_goal(goal_id).await?;
        debug!("Delete goal {} removed {} row(s)", goal_id, removed);
        Ok(())
    }

    async fn update_goal_status(&self, goal_id: i32, is_success: bool) -> Result<()> {
        let updated = self
            .goal_repo
            .update_goal_status(goal_id, is_success)
            .await?;
        debug!(
            "Set goal {} is_success={} updated {} row(s)",
            goal_id, is_success, updated
        );
        Ok(())
    }

    async fn check_connection(&self) -> Result<()> {
        self.goal_repo.ping().await
    }
}
