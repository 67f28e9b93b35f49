//! Form controller: owns the page-view state, validates submissions, calls
//! the transport, and tracks the transient "copied" acknowledgment.

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::transport::{Clipboard, ClipboardError, ParseTransport, TransportError};
use crate::types::{FormInput, ParseRequest};
use crate::validate::ValidationError;

/// How long the "Copied!" acknowledgment stays up after a successful copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// Copy button label while no acknowledgment is showing.
pub const COPY_LABEL: &str = "Copy Code";
/// Copy button label during the acknowledgment window.
pub const COPIED_LABEL: &str = "Copied!";

/// Everything that can end up in the result pane instead of a snippet.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Error processing results: {0}")]
    Transport(#[from] TransportError),

    #[error("Error: Failed to copy to clipboard")]
    Clipboard(#[source] ClipboardError),

    #[error("Error: There is no result to copy")]
    NothingToCopy,
}

/// Copy acknowledgment that expires on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyAck {
    copied_at: Option<Instant>,
}

impl CopyAck {
    pub fn mark(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.copied_at = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remaining().is_some()
    }

    /// Time left before the acknowledgment reverts, if it is still showing.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let copied_at = self.copied_at?;
        COPY_ACK_DURATION
            .checked_sub(copied_at.elapsed())
            .filter(|left| !left.is_zero())
    }
}

/// State of one page view. Dropped with the view; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: FormInput,
    result: String,
    copy_ack: CopyAck,
}

impl FormState {
    #[must_use]
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    /// Text currently shown in the result pane: a snippet or an error message.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copy_ack.is_active()
    }

    #[must_use]
    pub fn copy_label(&self) -> &'static str {
        if self.is_copied() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    fn set_result(&mut self, text: String) {
        self.result = text;
        self.copy_ack.clear();
    }
}

/// Drives a single page view against a [`ParseTransport`].
///
/// `submit` and `copy` take `&mut self`, so a controller never has two
/// operations in flight at once.
pub struct FormController<T> {
    state: FormState,
    transport: T,
}

impl<T: ParseTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_input(transport, FormInput::default())
    }

    pub fn with_input(transport: T, input: FormInput) -> Self {
        Self {
            state: FormState::new(input),
            transport,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut FormInput {
        &mut self.state.input
    }

    #[must_use]
    pub fn into_state(self) -> FormState {
        self.state
    }

    /// Validates the current input and, if it passes, sends one request.
    ///
    /// The outcome always lands in the result pane: the backend's HTML on
    /// success, otherwise the error's display text.
    ///
    /// # Errors
    ///
    /// - [`FormError::Validation`] when a field is missing or the link is not
    ///   a URL. No request is sent.
    /// - [`FormError::Transport`] when the backend call fails.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let outcome = self.send().await;
        match outcome {
            Ok(html) => {
                tracing::info!(bytes = html.len(), "received formatted results");
                self.state.set_result(html);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "form submission failed");
                self.state.set_result(e.to_string());
                Err(e)
            }
        }
    }

    async fn send(&self) -> Result<String, FormError> {
        let request = ParseRequest::try_from(&self.state.input)?;
        let payload = request.to_payload();
        tracing::debug!(
            county = %request.county_name(),
            link = %request.link(),
            parse_method = %request.parse_method(),
            result_type = %request.result_type(),
            "sending parse request"
        );
        let html = self.transport.parse_and_format(&payload).await?;
        Ok(html)
    }

    /// Copies the result pane text and starts the acknowledgment timer.
    ///
    /// # Errors
    ///
    /// - [`FormError::NothingToCopy`] when the result pane is empty.
    /// - [`FormError::Clipboard`] when the clipboard write fails; the error
    ///   message replaces the result pane content.
    pub async fn copy<C: Clipboard>(&mut self, clipboard: &C) -> Result<(), FormError> {
        if !self.state.has_result() {
            return Err(FormError::NothingToCopy);
        }

        let written = clipboard.write_text(&self.state.result).await;
        match written {
            Ok(()) => {
                self.state.copy_ack.mark();
                Ok(())
            }
            Err(source) => {
                tracing::error!(error = %source, "failed to copy result to clipboard");
                let err = FormError::Clipboard(source);
                self.state.set_result(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
