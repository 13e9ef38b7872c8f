use thiserror::Error;

/// Failures surfaced by [`TodoApi`](super::client::TodoApi) calls.
///
/// Only transport problems and undecodable list bodies are errors. A
/// mutation answered with a 4xx/5xx status still counts as success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
