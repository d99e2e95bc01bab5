//! Clipboard adapter - Implements ClipboardPort by piping to a command
//!
//! Works with any program that reads the clipboard contents from stdin,
//! such as `wl-copy`, `xclip -selection clipboard` or `pbcopy`.

use std::{process::Stdio, time::Duration};

use application::{error::ApplicationError, ports::ClipboardPort};
use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, instrument};

use crate::config::ClipboardConfig;

/// Clipboard writes through an external program
#[derive(Debug, Clone)]
pub struct CommandClipboardAdapter {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandClipboardAdapter {
    /// Create an adapter running `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Duration::from_secs(2),
        }
    }

    /// Create an adapter from configuration
    pub fn from_config(config: &ClipboardConfig) -> Self {
        Self::new(config.command.clone())
            .with_args(config.args.clone())
            .with_timeout(config.timeout())
    }

    /// Set the program arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set how long to wait for the program to exit
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, text: &str) -> Result<(), ApplicationError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ApplicationError::Clipboard(format!("'{}' not found", self.program))
                } else {
                    ApplicationError::Clipboard(format!("Failed to run '{}': {e}", self.program))
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await.map_err(|e| {
                ApplicationError::Clipboard(format!("Failed to write to '{}': {e}", self.program))
            })?;
        }

        let output = child.wait_with_output().await.map_err(|e| {
            ApplicationError::Clipboard(format!("Failed to wait for '{}': {e}", self.program))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::Clipboard(format!(
                "'{}' exited with status {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ClipboardPort for CommandClipboardAdapter {
    #[instrument(skip(self, text), fields(program = %self.program))]
    async fn write_text(&self, text: &str) -> Result<(), ApplicationError> {
        tokio::time::timeout(self.timeout, self.run(text))
            .await
            .map_err(|_| {
                ApplicationError::Clipboard(format!(
                    "'{}' did not finish within {:?}",
                    self.program, self.timeout
                ))
            })??;

        debug!(bytes = text.len(), "Copied to clipboard");
        Ok(())
    }
}
