//! System clipboard via the platform's copy command.

use std::future::Future;
use std::io::ErrorKind;
use std::process::Stdio;

use election_parser_core::{Clipboard, ClipboardError};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A clipboard command and the arguments that make it read from stdin.
#[derive(Debug, Clone)]
pub struct Provider {
    program: String,
    args: Vec<String>,
}

impl Provider {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

/// Tries each provider in order; the first one installed wins.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    providers: Vec<Provider>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_providers(vec![
            Provider::new("pbcopy", &[]),
            Provider::new("wl-copy", &[]),
            Provider::new("xclip", &["-selection", "clipboard"]),
            Provider::new("xsel", &["--clipboard", "--input"]),
            Provider::new("clip", &[]),
        ])
    }
}

impl SystemClipboard {
    pub fn with_providers(providers: Vec<Provider>) -> Self {
        Self { providers }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send {
        let text = text.to_owned();
        async move {
            for provider in &self.providers {
                match pipe_to(provider, &text).await {
                    Ok(()) => {
                        tracing::debug!(program = %provider.program, "copied result to clipboard");
                        return Ok(());
                    }
                    Err(ClipboardError::Io(e)) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e),
                }
            }
            Err(ClipboardError::Unavailable)
        }
    }
}

async fn pipe_to(provider: &Provider, text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(&provider.program)
        .args(&provider.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
        // Dropping stdin closes the pipe so the command sees EOF.
    }

    let status = child.wait().await?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed {
            program: provider.program.clone(),
            status: status.to_string(),
        })
    }
}
