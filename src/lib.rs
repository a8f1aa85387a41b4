pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::github::GithubClient;
pub use app::sync::{SyncEngine, SyncReport};
pub use config::manifest::Manifest;
pub use config::CliConfig;
pub use core::schedule::generate_milestones;
pub use domain::model::{Milestone, MilestoneState, SprintPlan};
pub use domain::ports::MilestoneStore;
pub use utils::error::{Result, SprintError};
