use std::time::Duration;

use crate::{JobId, JobQuery, JobStatus, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchStats,
    FetchSources,
    FetchJobs {
        request_id: RequestId,
        query: JobQuery,
    },
    UpdateJobStatus {
        job_id: JobId,
        status: JobStatus,
    },
    /// Replaces any pending debounce timer with a new one.
    StartSearchDebounce {
        generation: u64,
        delay: Duration,
    },
    OpenJobUrl {
        url: String,
    },
}
