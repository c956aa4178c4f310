use thiserror::Error;

/// Failures of a single round trip to the cars API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Car not found: {0}")]
    NotFound(String),

    /// The server refused the submitted payload (400 or 422).
    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but its body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-success HTTP status. `resource` names what was asked
    /// for and is reported back on a 404.
    pub fn from_status(status: u16, body: impl Into<String>, resource: &str) -> Self {
        let body = body.into();
        match status {
            404 => ApiError::NotFound(resource.to_string()),
            400 | 422 => ApiError::Rejected { status, body },
            _ => ApiError::Status { status, body },
        }
    }
}
