/// Failures talking to the remote content API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server rejected the bearer token (HTTP 401).
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("upload response carried no url")]
    MissingUploadUrl,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Failures persisting preferences.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("preference storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}
