use serde::{Deserialize, Serialize};

use crate::ApiError;

pub type JobId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub applied: u64,
    pub pending: u64,
    pub failed: u64,
}

/// One job row as served by `/api/jobs`. Unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub source_category: String,
    pub url: String,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub scraped_date: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobsPage {
    pub jobs: Vec<JobRecord>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Applied,
    Failed,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListJobsParams {
    pub search: String,
    pub source: String,
    pub status: String,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsBody {
    pub stats: Stats,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SourcesBody {
    pub sources: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody {
    pub status: JobStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    StatsFetched(Result<Stats, ApiError>),
    SourcesFetched(Result<Vec<String>, ApiError>),
    JobsFetched {
        request_id: u64,
        result: Result<JobsPage, ApiError>,
    },
    StatusUpdated {
        job_id: JobId,
        result: Result<(), ApiError>,
    },
    DebounceElapsed {
        generation: u64,
    },
}
