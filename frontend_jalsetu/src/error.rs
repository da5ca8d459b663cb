// frontend_jalsetu/src/error.rs
use thiserror::Error;

/// Errors surfaced while producing a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The form is incomplete or holds non-positive values.
    #[error("{0}")]
    Validation(String),

    /// The request could not be built or sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The estimation service answered with a non-2xx status.
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    /// The response body was not a report.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Runtime configuration could not be loaded.
    #[error("Failed to load config: {0}")]
    Config(String),
}

impl ReportError {
    pub fn backend(status: u16, detail: impl Into<String>) -> Self {
        Self::Backend {
            status,
            detail: detail.into(),
        }
    }
}

impl From<gloo::net::Error> for ReportError {
    fn from(e: gloo::net::Error) -> Self {
        match e {
            gloo::net::Error::SerdeError(e) => ReportError::Parse(e.to_string()),
            other => ReportError::Request(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            ReportError::Validation("Please fill in all required fields".into()).to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            ReportError::backend(400, "Invalid roof type").to_string(),
            "Invalid roof type"
        );
        assert_eq!(
            ReportError::Request("offline".into()).to_string(),
            "Request failed: offline"
        );
    }
}
