//! Slidecast - slide presentations in the terminal
//!
//! This library provides the slide store and the presentation controller
//! shared by the Slidecast binaries, plus their configuration and logging.

pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use deck::Deck;
pub use error::{DeckError, Result, SlidecastError};
pub use presentation::{Navigation, Position, Presentation};
pub use types::Slide;
