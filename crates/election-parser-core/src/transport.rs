//! Seams between the form controller and the outside world.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::types::ParsePayload;

/// Why the backend call failed, in the three shapes the form distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Unable to connect to the server at {base_url}. Please check if the API is accessible.")]
    Unreachable { base_url: String },

    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Other(String),
}

/// Sends a payload to the parse-and-format backend and yields its HTML body.
pub trait ParseTransport {
    fn parse_and_format(
        &self,
        payload: &ParsePayload,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

impl<T: ParseTransport> ParseTransport for Arc<T> {
    fn parse_and_format(
        &self,
        payload: &ParsePayload,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        (**self).parse_and_format(payload)
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard provider available")]
    Unavailable,

    #[error("clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard command `{program}` exited with {status}")]
    CommandFailed { program: String, status: String },
}

/// Writes text to the system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}
