//! # homeremote-adapter-console
//!
//! [`StatusSink`] implementation that prints every status message as one line
//! on a writer, normally stdout.
//!
//! Write failures never reach the caller: they are logged with `tracing` and
//! the message is dropped, so a closed pipe cannot interrupt the remote.
//!
//! ## Dependency rule
//!
//! Depends on `homeremote-app` (port traits) and `homeremote-domain` only.

pub mod config;
pub mod error;

use std::cell::RefCell;
use std::io::{self, Write};

use homeremote_app::ports::StatusSink;
use homeremote_domain::status::StatusMessage;

pub use config::{ConsoleConfig, OutputFormat};
pub use error::ConsoleError;

/// Prints status messages, one per line.
pub struct ConsoleSink<W> {
    writer: RefCell<W>,
    config: ConsoleConfig,
}

impl ConsoleSink<io::Stdout> {
    /// Sink printing to the process's standard output.
    #[must_use]
    pub fn stdout(config: ConsoleConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink printing to `writer` as described by `config`.
    #[must_use]
    pub fn new(writer: W, config: ConsoleConfig) -> Self {
        Self {
            writer: RefCell::new(writer),
            config,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Format and write a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Encode`] if JSON encoding fails and
    /// [`ConsoleError::Io`] if the writer rejects the line.
    pub fn write_message(&self, message: &StatusMessage) -> Result<(), ConsoleError> {
        let line = match self.config.format {
            OutputFormat::Text => message.render(self.config.language),
            OutputFormat::Json => serde_json::to_string(message)?,
        };
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write> StatusSink for ConsoleSink<W> {
    fn publish(&self, message: StatusMessage) {
        if let Err(err) = self.write_message(&message) {
            tracing::warn!(%err, ?message, "dropping status message");
        }
    }
}
