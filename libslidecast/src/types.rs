//! Core types for Slidecast

use serde::{Deserialize, Serialize};

/// A single slide: a title, ordered bullet points, and an optional footnote.
///
/// Bullets are rendered in the order they appear in the deck file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,

    #[serde(default)]
    pub bullets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
            footnote: None,
        }
    }

    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    /// Footnote text, treating a blank footnote as absent
    pub fn footnote(&self) -> Option<&str> {
        self.footnote
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
