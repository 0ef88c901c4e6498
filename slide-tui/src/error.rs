//! Error types for slide-tui
//!
//! Wraps library errors (config, deck loading) and terminal/IO errors
//! for unified error handling in the viewer.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (configuration or deck loading)
    #[error("{0}")]
    Slidecast(#[from] libslidecast::SlidecastError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    /// Exit code for the process, following the library's convention
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Slidecast(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use libslidecast::{DeckError, SlidecastError};

    #[test]
    fn test_exit_code_passes_through_library_errors() {
        let error = TuiError::from(SlidecastError::InvalidInput("bad".to_string()));
        assert_eq!(error.exit_code(), 3);

        let error = TuiError::from(SlidecastError::Deck(DeckError::Empty));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_terminal_error_message() {
        let error = TuiError::from(std::io::Error::new(std::io::ErrorKind::Other, "no tty"));
        assert_eq!(error.to_string(), "Terminal error: no tty");
    }
}
