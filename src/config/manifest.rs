use crate::domain::model::SprintPlan;
use crate::utils::error::{Result, SprintError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The manifest file: one sprint plan plus the repositories it applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub sprint: SprintPlan,
    #[serde(default)]
    pub repos: Vec<RepoConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    pub name: String,
}

impl Manifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SprintError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SprintError::ConfigError {
            field: "manifest".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR}` references with environment variables, leaving
    /// unresolved references as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_manifest(&self) -> Result<()> {
        validation::validate_non_empty_string("sprint.title_format", &self.sprint.title_format)?;
        validation::validate_non_empty_string("sprint.duration", &self.sprint.duration)?;

        if self.sprint.terms.is_empty() {
            return Err(SprintError::ConfigError {
                field: "sprint.terms".to_string(),
                message: "at least one term is required".to_string(),
            });
        }

        for repo in &self.repos {
            validation::validate_repo_slug("repos.name", &repo.name)?;
        }

        Ok(())
    }
}

impl Validate for Manifest {
    fn validate(&self) -> Result<()> {
        self.validate_manifest()
    }
}
