//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use std::sync::Arc;

use libslidecast::config::UiSettings;
use libslidecast::{Deck, Position, Presentation, Slide};
use ratatui::layout::Rect;

/// Root application state
///
/// This is the single source of truth for the viewer. The deck is shared and
/// read-only; only the presentation index and UI flags change.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Slides being presented
    pub deck: Arc<Deck>,

    /// Current slide index
    pub presentation: Presentation,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Last known terminal area, used to hit-test mouse clicks
    pub viewport: Rect,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Start with mouse capture on?
    pub mouse_enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiSettings::default().into()
    }
}

impl From<UiSettings> for UiConfig {
    fn from(settings: UiSettings) -> Self {
        Self {
            colors_enabled: settings.colors,
            unicode_enabled: settings.unicode,
            tick_rate_ms: settings.tick_rate_ms,
            mouse_enabled: settings.mouse,
        }
    }
}

impl AppState {
    /// Create application state for `deck`, starting at the first slide
    pub fn new(deck: Deck) -> Self {
        Self::with_config(deck, UiConfig::default())
    }

    pub fn with_config(deck: Deck, config: UiConfig) -> Self {
        let presentation = Presentation::new(deck.len());
        Self {
            should_quit: false,
            deck: Arc::new(deck),
            presentation,
            mouse_enabled: config.mouse_enabled,
            help_visible: false,
            viewport: Rect::default(),
            config,
        }
    }

    /// Slide at the current index
    pub fn current_slide(&self) -> &Slide {
        // The presentation is sized from the deck, so the index is always in range.
        &self.deck.slides()[self.presentation.index()]
    }

    pub fn progress(&self) -> u8 {
        self.presentation.progress()
    }

    pub fn position(&self) -> Position {
        self.presentation.position()
    }
}
