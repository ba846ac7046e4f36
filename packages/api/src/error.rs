use store::models::UnknownRole;
use thiserror::Error;

/// A draft that must not be sent. The `Display` text is shown inline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: Tutor ID not found. Please log in as a tutor.")]
    MissingTutorId,

    #[error("Please select a file to upload.")]
    MissingFile,

    #[error("Please enter a YouTube URL.")]
    MissingYoutubeUrl,
}

/// Failure talking to the remote API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Status error: {} (Status {status})", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: u16,
        detail: Option<String>,
    },

    /// The success body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Account has {0}")]
    InvalidRole(#[from] UnknownRole),
}

impl ApiError {
    /// Best available text for the user: the server's `detail`, else a
    /// description of what went wrong.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status {
                status,
                detail: None,
            } => format!("Request failed with status code {status}"),
            ApiError::Transport(e) => e.to_string(),
            ApiError::Decode(reason) => reason.clone(),
            ApiError::InvalidRole(e) => format!("Account has {e}"),
        }
    }
}

/// Why a submission did not succeed.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An upload is already in progress.")]
    AlreadyPending,

    #[error("Upload failed: {}", .0.detail())]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_detail_prefers_server_text() {
        let err = ApiError::Status {
            status: 422,
            detail: Some("Unsupported file type".to_string()),
        };
        assert_eq!(err.detail(), "Unsupported file type");
        assert_eq!(
            UploadError::from(err).to_string(),
            "Upload failed: Unsupported file type"
        );
    }

    #[test]
    fn test_status_detail_fallback() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.detail(), "Request failed with status code 500");
    }

    #[test]
    fn test_validation_messages() {
        assert!(UploadError::from(ValidationError::MissingTutorId)
            .to_string()
            .contains("Tutor ID not found"));
        assert_eq!(
            ValidationError::MissingFile.to_string(),
            "Please select a file to upload."
        );
        assert_eq!(
            ValidationError::MissingYoutubeUrl.to_string(),
            "Please enter a YouTube URL."
        );
    }
}
