use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    /// The backend answered `{"success": false}`.
    #[error("backend reported failure (status {status}): {message}")]
    Unsuccessful { status: u16, message: String },
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout(err.to_string());
        }
        if err.is_builder() {
            return ApiError::InvalidUrl(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}
