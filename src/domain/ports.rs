use crate::domain::model::{IssueRef, Milestone, RemoteMilestone};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MilestoneStore: Send + Sync {
    async fn create(&self, owner: &str, repo: &str, milestone: &Milestone) -> Result<()>;
    async fn list(&self, owner: &str, repo: &str) -> Result<Vec<RemoteMilestone>>;
    async fn delete(&self, owner: &str, repo: &str, milestone: &RemoteMilestone) -> Result<()>;
    async fn issues_for_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueRef>>;
}
