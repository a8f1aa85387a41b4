use crate::config::manifest::Manifest;
use crate::core::schedule::generate_milestones;
use crate::domain::model::Milestone;
use crate::domain::ports::MilestoneStore;
use crate::utils::error::{Result, SprintError};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    pub repos: usize,
    pub milestones: usize,
}

/// Applies a manifest to every repository it names: generates the milestone
/// schedule once (the generator is pure), then creates the milestones in each
/// repository. Repositories are processed concurrently up to `concurrency`;
/// calls within one repository stay sequential and fail fast.
pub struct SyncEngine<S: MilestoneStore> {
    store: Arc<S>,
    manifest: Manifest,
    update: bool,
    concurrency: usize,
}

impl<S: MilestoneStore + 'static> SyncEngine<S> {
    pub fn new(store: S, manifest: Manifest, update: bool, concurrency: usize) -> Self {
        Self {
            store: Arc::new(store),
            manifest,
            update,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn run(&self) -> Result<SyncReport> {
        let milestones = Arc::new(generate_milestones(&self.manifest.sprint)?);
        tracing::info!(
            "generated {} milestones across {} terms",
            milestones.len(),
            self.manifest.sprint.terms.len()
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        for repo in &self.manifest.repos {
            let store = Arc::clone(&self.store);
            let milestones = Arc::clone(&milestones);
            let semaphore = Arc::clone(&semaphore);
            let name = repo.name.clone();
            let update = self.update;
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                apply_repo(store.as_ref(), &name, &milestones, update)
                    .await
                    .map_err(|e| {
                        tracing::error!("sync failed for {}: {}", name, e);
                        e
                    })
            });
        }

        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            let result = joined.unwrap_or_else(|e| {
                Err(SprintError::SyncError {
                    message: format!("repository task panicked: {}", e),
                })
            });
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(SyncReport {
                repos: self.manifest.repos.len(),
                milestones: milestones.len(),
            }),
        }
    }
}

async fn apply_repo<S: MilestoneStore>(
    store: &S,
    name: &str,
    milestones: &[Milestone],
    update: bool,
) -> Result<()> {
    let (owner, repo) = split_repo_name(name)?;

    if update {
        let existing = store.list(owner, repo).await?;
        for milestone in &existing {
            let issues = store.issues_for_milestone(owner, repo, milestone.number).await?;
            for issue in &issues {
                tracing::warn!(
                    "issue {:?} loses milestone {:?}: {}",
                    issue.title,
                    milestone.title,
                    issue.url
                );
            }
            store.delete(owner, repo, milestone).await?;
        }
    }

    for milestone in milestones {
        store.create(owner, repo, milestone).await?;
    }

    Ok(())
}

fn split_repo_name(name: &str) -> Result<(&str, &str)> {
    match name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(SprintError::ConfigError {
            field: "repos.name".to_string(),
            message: format!("repository name {:?} is invalid, expected owner/repo", name),
        }),
    }
}
