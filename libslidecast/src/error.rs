//! Error types for Slidecast

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlidecastError>;

#[derive(Error, Debug)]
pub enum SlidecastError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SlidecastError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SlidecastError::InvalidInput(_) => 3,
            SlidecastError::Config(_) => 1,
            SlidecastError::Deck(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("No configuration directory on this platform; set SLIDECAST_CONFIG")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read deck file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Deck contains no slides")]
    Empty,

    #[error("Slide {0} has an empty title")]
    EmptyTitle(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = SlidecastError::InvalidInput("Slide 0 does not exist".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = SlidecastError::Config(ConfigError::NoConfigDir);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_deck_error() {
        let error = SlidecastError::Deck(DeckError::Empty);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = SlidecastError::InvalidInput("--slide must be at least 1".to_string());
        let message = format!("{}", error);
        assert_eq!(message, "Invalid input: --slide must be at least 1");
    }

    #[test]
    fn test_error_message_formatting_deck() {
        let error = SlidecastError::Deck(DeckError::EmptyTitle(3));
        let message = format!("{}", error);
        assert_eq!(message, "Deck error: Slide 3 has an empty title");
    }

    #[test]
    fn test_error_message_formatting_config() {
        let error = SlidecastError::Config(ConfigError::NoConfigDir);
        let message = format!("{}", error);
        assert_eq!(
            message,
            "Configuration error: No configuration directory on this platform; set SLIDECAST_CONFIG"
        );
    }

    #[test]
    fn test_deck_read_error_includes_path() {
        let error = DeckError::Read {
            path: PathBuf::from("/tmp/missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        };
        let message = format!("{}", error);
        assert!(message.contains("/tmp/missing.toml"));
        assert!(message.contains("File not found"));
    }

    #[test]
    fn test_error_conversion_from_deck_error() {
        let slidecast_error: SlidecastError = DeckError::Empty.into();

        match slidecast_error {
            SlidecastError::Deck(_) => {
                // Success - correct conversion
            }
            _ => panic!("Expected SlidecastError::Deck"),
        }
    }

    #[test]
    fn test_config_error_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let config_error = ConfigError::ReadError(io_error);
        let message = format!("{}", config_error);
        assert!(message.contains("Failed to read config file"));
    }
}
