use election_parser_core::TransportError;
use thiserror::Error;

/// Errors returned by [`crate::ParseClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached: connect failure or timeout.
    #[error("Unable to connect to the server at {base_url}. Please check if the API is accessible.")]
    Unreachable {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Any other failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<ClientError> for TransportError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unreachable { base_url, .. } => TransportError::Unreachable { base_url },
            ClientError::Status { status, body } => TransportError::Status { status, body },
            ClientError::Http(e) => TransportError::Other(e.to_string()),
            e @ ClientError::InvalidBaseUrl { .. } => TransportError::Other(e.to_string()),
        }
    }
}
