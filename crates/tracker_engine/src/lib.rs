//! Job tracker engine: backend HTTP client and effect execution.
mod client;
mod engine;
mod error;
mod types;

pub use client::{ClientSettings, JobsApi, ReqwestJobsApi};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use error::ApiError;
pub use types::{EngineEvent, JobId, JobRecord, JobStatus, JobsPage, ListJobsParams, Stats};
