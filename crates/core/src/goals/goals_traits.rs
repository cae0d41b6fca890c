use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations.
///
/// Every method runs exactly one statement on a connection acquired for that
/// call. Delete and status updates report the number of rows touched; zero is
/// not an error.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<i32>;
    async fn delete_goal(&self, goal_id: i32) -> Result<usize>;
    async fn update_goal_status(&self, goal_id: i32, is_success: bool) -> Result<usize>;
    async fn ping(&self) -> Result<()>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<i32>;
    async fn delete_goal(&self, goal_id: i32) -> Result<()>;
    async fn update_goal_status(&self, goal_id: i32, is_success: bool) -> Result<()>;
    async fn check_connection(&self) -> Result<()>;
}
