//! Console adapter error types.

/// Errors raised while printing a status message.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The underlying writer rejected the line.
    #[error("failed to write status line")]
    Io(#[from] std::io::Error),

    /// The message could not be encoded as JSON.
    #[error("failed to encode status message")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_io_error() {
        let err = ConsoleError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "failed to write status line");
    }

    #[test]
    fn should_keep_io_error_as_source() {
        use std::error::Error;

        let err = ConsoleError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.source().is_some());
    }
}
