use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    Open,
    Closed,
}

impl fmt::Display for MilestoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneState::Open => write!(f, "open"),
            MilestoneState::Closed => write!(f, "closed"),
        }
    }
}

/// A milestone produced by the schedule generator. `sid` restarts at 1 for each
/// sprint term; the backend-assigned number does not exist until the remote
/// store reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub sid: u32,
    pub title: String,
    pub state: MilestoneState,
    pub description: String,
    pub start_on: NaiveDate,
    pub due_on: NaiveDate,
}

/// A milestone record as reported by the remote store. The backend keeps no
/// start date, and a due date is not guaranteed there either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteMilestone {
    pub number: u64,
    pub title: String,
    pub state: MilestoneState,
    pub description: String,
    pub due_on: Option<NaiveDate>,
}

/// An issue still linked to a milestone, reported when that milestone is
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRef {
    pub title: String,
    pub url: String,
}

/// Declarative sprint calendar as read from the manifest. Dates, duration and
/// weekday names stay textual so parse errors can cite the raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintPlan {
    pub title_format: String,
    pub duration: String,
    pub terms: Vec<TermSpec>,
    #[serde(default)]
    pub ignore: IgnoreSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSpec {
    pub start_on: String,
    pub due_on: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IgnoreSpec {
    #[serde(default)]
    pub terms: Vec<TermSpec>,
    #[serde(default)]
    pub weekdays: Vec<String>,
}
