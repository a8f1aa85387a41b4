use crate::domain::model::{IssueRef, Milestone, MilestoneState, RemoteMilestone};
use crate::domain::ports::MilestoneStore;
use crate::utils::error::{Result, SprintError};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!("sprint-sync/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: usize = 10;

/// GitHub REST v3 implementation of the milestone store. In dry-run mode the
/// writes (create/delete) are logged and skipped; reads still go out.
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: String,
    dry_run: bool,
}

impl GithubClient {
    pub fn new(api_url: &str, token: String, dry_run: bool) -> Self {
        Self {
            client: Client::new(),
            base_url: api_url.trim_end_matches('/').to_string(),
            token,
            dry_run,
        }
    }

    /// Builds a client with the token taken from `GITHUB_TOKEN`.
    pub fn from_env(api_url: &str, dry_run: bool) -> Result<Self> {
        let token =
            std::env::var("GITHUB_TOKEN").map_err(|_| SprintError::MissingEnvError {
                name: "GITHUB_TOKEN".to_string(),
            })?;
        Ok(Self::new(api_url, token, dry_run))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
    }

    fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(SprintError::ApiStatusError {
                status,
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }
}

#[derive(Debug, Serialize)]
struct MilestonePayload<'a> {
    title: &'a str,
    state: MilestoneState,
    description: &'a str,
    due_on: String,
}

#[derive(Debug, Deserialize)]
struct MilestoneRecord {
    number: u64,
    title: String,
    state: MilestoneState,
    description: Option<String>,
    due_on: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IssueRecord {
    title: String,
    html_url: String,
}

impl MilestoneRecord {
    fn into_remote(self) -> Result<RemoteMilestone> {
        let due_on = self
            .due_on
            .as_deref()
            .map(parse_remote_date)
            .transpose()?;
        Ok(RemoteMilestone {
            number: self.number,
            title: self.title,
            state: self.state,
            description: self.description.unwrap_or_default(),
            due_on,
        })
    }
}

fn parse_remote_date(value: &str) -> Result<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| SprintError::DateParseError {
            field: "milestone.due_on".to_string(),
            value: value.to_string(),
        })
}

fn to_remote_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc3339()
}

#[async_trait]
impl MilestoneStore for GithubClient {
    async fn create(&self, owner: &str, repo: &str, milestone: &Milestone) -> Result<()> {
        tracing::info!("create {:?} in {}/{}", milestone.title, owner, repo);
        if self.dry_run {
            return Ok(());
        }

        let url = format!("{}/repos/{}/{}/milestones", self.base_url, owner, repo);
        let payload = MilestonePayload {
            title: &milestone.title,
            state: milestone.state,
            description: &milestone.description,
            due_on: to_remote_date(milestone.due_on),
        };
        let response = self
            .request(Method::POST, &url)
            .json(&payload)
            .send()
            .await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn list(&self, owner: &str, repo: &str) -> Result<Vec<RemoteMilestone>> {
        let url = format!("{}/repos/{}/{}/milestones", self.base_url, owner, repo);

        let mut milestones = Vec::new();
        let mut page = 1usize;
        loop {
            let per_page = PER_PAGE.to_string();
            let page_number = page.to_string();
            let response = self
                .request(Method::GET, &url)
                .query(&[
                    ("state", "open"),
                    ("per_page", per_page.as_str()),
                    ("page", page_number.as_str()),
                ])
                .send()
                .await?;
            let records: Vec<MilestoneRecord> = Self::ensure_success(response)?.json().await?;
            let count = records.len();

            for record in records {
                milestones.push(record.into_remote()?);
            }
            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(milestones)
    }

    async fn delete(&self, owner: &str, repo: &str, milestone: &RemoteMilestone) -> Result<()> {
        tracing::info!("delete {:?} in {}/{}", milestone.title, owner, repo);
        if self.dry_run {
            return Ok(());
        }

        let url = format!(
            "{}/repos/{}/{}/milestones/{}",
            self.base_url, owner, repo, milestone.number
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn issues_for_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueRef>> {
        let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
        let milestone_number = number.to_string();
        let response = self
            .request(Method::GET, &url)
            .query(&[
                ("milestone", milestone_number.as_str()),
                ("state", "all"),
                ("per_page", "100"),
            ])
            .send()
            .await?;
        let records: Vec<IssueRecord> = Self::ensure_success(response)?.json().await?;

        Ok(records
            .into_iter()
            .map(|record| IssueRef {
                title: record.title,
                url: record.html_url,
            })
            .collect())
    }
}
