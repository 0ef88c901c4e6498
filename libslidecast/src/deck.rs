//! Slide store
//!
//! A [`Deck`] is the ordered, read-only list of slides plus the metadata
//! shown around them. It is built once at startup and never mutated; every
//! constructor validates that the deck has at least one slide and that every
//! slide has a title.
//!
//! The default deck is compiled into the binary. A deck with the same TOML
//! schema can also be read from a local file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeckError, Result};
use crate::types::Slide;

/// TOML source of the deck compiled into the library
pub const BUILTIN_DECK: &str = include_str!("../decks/briefing.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    eyebrow: String,
    title: String,
    sources: Vec<String>,
    slides: Vec<Slide>,
}

/// Deck as written in TOML, before validation
#[derive(Debug, Deserialize)]
struct RawDeck {
    #[serde(default)]
    eyebrow: String,

    title: String,

    #[serde(default)]
    sources: Vec<String>,

    slides: Vec<Slide>,
}

impl TryFrom<RawDeck> for Deck {
    type Error = DeckError;

    fn try_from(raw: RawDeck) -> std::result::Result<Self, Self::Error> {
        let deck = Self {
            eyebrow: raw.eyebrow,
            title: raw.title,
            sources: raw.sources,
            slides: raw.slides,
        };
        deck.validate()?;
        Ok(deck)
    }
}

impl Deck {
    /// Build a deck from already-constructed slides
    pub fn new(
        eyebrow: impl Into<String>,
        title: impl Into<String>,
        sources: Vec<String>,
        slides: Vec<Slide>,
    ) -> Result<Self> {
        let deck = Self {
            eyebrow: eyebrow.into(),
            title: title.into(),
            sources,
            slides,
        };
        deck.validate()?;
        Ok(deck)
    }

    /// Load the deck compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_DECK)
    }

    /// Parse a deck from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawDeck = toml::from_str(content).map_err(DeckError::Parse)?;
        let deck = Deck::try_from(raw)?;
        debug!(slides = deck.slides.len(), title = %deck.title, "deck loaded");
        Ok(deck)
    }

    /// Load a deck from a TOML file on disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load the deck at `path`, or the built-in deck when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> std::result::Result<(), DeckError> {
        if self.slides.is_empty() {
            return Err(DeckError::Empty);
        }

        if let Some(position) = self
            .slides
            .iter()
            .position(|slide| slide.title.trim().is_empty())
        {
            return Err(DeckError::EmptyTitle(position + 1));
        }

        Ok(())
    }

    pub fn eyebrow(&self) -> &str {
        &self.eyebrow
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Sources joined for display, e.g. "Davidson · Kumar & Clark"
    pub fn sources_line(&self, separator: &str) -> String {
        self.sources.join(separator)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides, always at least one
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept alongside `len` for API symmetry
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_parses() {
        let deck = Deck::builtin().unwrap();

        assert_eq!(deck.title(), "Pregnancy & Kidney: Evidence-Based Overview");
        assert_eq!(deck.eyebrow(), "Comprehensive Clinical Briefing");
        assert_eq!(deck.sources(), ["Davidson", "Kumar & Clark", "Harrison"]);
        assert!(deck.len() > 1);
    }

    #[test]
    fn test_builtin_deck_has_slides_with_and_without_footnotes() {
        let deck = Deck::builtin().unwrap();

        assert!(deck.slides().iter().any(|s| s.footnote().is_some()));
        assert!(deck.slides().iter().any(|s| s.footnote().is_none()));
    }

    #[test]
    fn test_sources_line() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.sources_line(" · "), "Davidson · Kumar & Clark · Harrison");
    }

    #[test]
    fn test_empty_deck_rejected() {
        let result = Deck::new("", "Empty", Vec::new(), Vec::new());
        assert!(matches!(
            result,
            Err(crate::SlidecastError::Deck(DeckError::Empty))
        ));
    }

    #[test]
    fn test_empty_title_rejected_with_position() {
        let slides = vec![
            Slide::new("First", Vec::new()),
            Slide::new("  ", Vec::new()),
        ];
        let result = Deck::new("", "Deck", Vec::new(), slides);
        assert!(matches!(
            result,
            Err(crate::SlidecastError::Deck(DeckError::EmptyTitle(2)))
        ));
    }

    #[test]
    fn test_toml_without_slides_is_a_parse_error() {
        let result = Deck::from_toml(r#"title = "No slides""#);
        assert!(matches!(
            result,
            Err(crate::SlidecastError::Deck(DeckError::Parse(_)))
        ));
    }

    #[test]
    fn test_serde_rejects_empty_deck() {
        let result = toml::from_str::<Deck>("title = \"x\"\nslides = []");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no slides"), "{err}");
    }

    #[test]
    fn test_serde_rejects_untitled_slide() {
        let result = toml::from_str::<Deck>(
            r#"
title = "Deck"

[[slides]]
title = ""
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_keeps_typed_validation_errors() {
        let result = Deck::from_toml("title = \"x\"\nslides = []");
        assert!(matches!(
            result,
            Err(crate::SlidecastError::Deck(DeckError::Empty))
        ));
    }

    #[test]
    fn test_bullet_order_preserved() {
        let deck = Deck::from_toml(
            r#"
title = "Order"

[[slides]]
title = "Only"
bullets = ["c", "a", "b"]
"#,
        )
        .unwrap();

        assert_eq!(deck.get(0).unwrap().bullets, vec!["c", "a", "b"]);
        assert!(deck.get(1).is_none());
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let deck = Deck::load(None).unwrap();
        assert_eq!(deck.len(), Deck::builtin().unwrap().len());
    }
}
