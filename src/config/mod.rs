pub mod manifest;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sprint-sync")]
#[command(about = "Generate sprint milestones from a manifest and sync them to GitHub")]
pub struct CliConfig {
    #[arg(long, default_value = "sprint.toml")]
    pub manifest: String,

    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    #[arg(long, help = "Log planned changes without touching the remote store")]
    pub dry_run: bool,

    #[arg(long, help = "Delete existing open milestones before creating new ones")]
    pub update: bool,

    #[arg(long, default_value = "5")]
    pub concurrency: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        validation::validate_positive_number("concurrency", self.concurrency, 1)?;
        validation::validate_non_empty_string("manifest", &self.manifest)?;
        Ok(())
    }
}
