//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use tracing::trace;

use crate::error::SiteError;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, so the platform's outgoing body and a
/// plain `Vec<Vec<u8>>` in tests go through the same path.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), SiteError> {
        if self.state != SinkState::Initial {
            return Err(SiteError::Stream(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.write(html.as_bytes().to_vec()).await?;
        self.state = SinkState::ShellSent;
        trace!(bytes = html.len(), "shell sent");

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), SiteError> {
        self.ensure_open()?;

        self.write(html.as_bytes().to_vec()).await?;
        self.sections_sent.push(name.to_string());
        trace!(section = name, bytes = html.len(), "section sent");

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), SiteError> {
        self.ensure_open()?;
        self.write(bytes).await
    }

    /// Flush and complete the response.
    pub async fn complete(&mut self) -> Result<(), SiteError> {
        if self.state == SinkState::Completed {
            return Ok(());
        }
        self.inner
            .close()
            .await
            .map_err(|e| SiteError::Stream(e.to_string()))?;
        self.state = SinkState::Completed;
        Ok(())
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total body bytes written so far.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), SiteError> {
        match self.state {
            SinkState::Initial => Err(SiteError::ShellNotSent),
            SinkState::Completed => Err(SiteError::Stream("Sink already completed".to_string())),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), SiteError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| SiteError::Stream(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }
}
