use thiserror::Error;

/// Failure of a call to the captioning API.
///
/// The UI does not distinguish between variants; they only end up in the
/// console so a failed call can be diagnosed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request rejected by the API: {0}")]
    Rejected(String),
}
