use std::time::Duration;

use reqwest::{Response, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::types::{SourcesBody, StatsBody, StatusBody};
use crate::{ApiError, JobId, JobStatus, JobsPage, ListJobsParams, Stats};

/// Transport settings. `None` leaves the transport default in place.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

/// The backend's REST surface.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    async fn stats(&self) -> Result<Stats, ApiError>;
    async fn sources(&self) -> Result<Vec<String>, ApiError>;
    async fn list_jobs(&self, params: &ListJobsParams) -> Result<JobsPage, ApiError>;
    async fn update_status(&self, job_id: JobId, status: JobStatus) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsApi {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestJobsApi {
    pub fn new(base_url: &str, settings: &ClientSettings) -> Result<Self, ApiError> {
        let mut base =
            Url::parse(base_url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base_url} cannot be a base url")));
        }
        // Joining relative paths replaces the last segment unless the path is a directory.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::from_reqwest)?;

        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsApi {
    async fn stats(&self) -> Result<Stats, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/stats")?)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let body: StatsBody = read_envelope(response).await?;
        Ok(body.stats)
    }

    async fn sources(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/sources")?)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let body: SourcesBody = read_envelope(response).await?;
        Ok(body.sources)
    }

    async fn list_jobs(&self, params: &ListJobsParams) -> Result<JobsPage, ApiError> {
        let mut url = self.endpoint("api/jobs")?;
        url.query_pairs_mut()
            .append_pair("search", &params.search)
            .append_pair("source", &params.source)
            .append_pair("status", &params.status)
            .append_pair("page", &params.page.to_string())
            .append_pair("per_page", &params.per_page.to_string());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        read_envelope(response).await
    }

    async fn update_status(&self, job_id: JobId, status: JobStatus) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("api/jobs/{job_id}/status"))?;
        let response = self
            .client
            .put(url)
            .json(&StatusBody { status })
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let _: IgnoredAny = read_envelope(response).await?;
        Ok(())
    }
}

/// Decodes a `{"success": bool, ...}` envelope into `T`.
///
/// Error statuses still carry a JSON envelope when the backend handled the
/// failure itself; only bodies that are not JSON fall back to `HttpStatus`.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(ApiError::from_reqwest)?;

    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => return Err(ApiError::HttpStatus(status.as_u16())),
        Err(err) => return Err(ApiError::Decode(err.to_string())),
    };

    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !success {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| status.to_string());
        return Err(ApiError::Unsuccessful {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
