pub mod asana;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::ActionConfig;
use crate::model::task::{Task, TaskUpdate};

/// Task tracking system the pull request links into.
#[async_trait]
pub trait TaskTracker: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_task(&self, task_id: &str) -> Result<Task>;
    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<Task>;
}


pub fn create_tracker(config: &ActionConfig) -> Box<dyn TaskTracker> {
    Box::new(asana::AsanaTracker::new(
        config.asana_base_url.clone(),
        config.asana_token.clone(),
    ))
}
