//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};
use libslidecast::Navigation;

/// Actions that trigger state transitions
///
/// Actions are plain data describing what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying actions to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (when enabled)
    Mouse(MouseEvent),

    /// Periodic tick, emitted when no input arrived within the tick rate
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Slide Navigation ===
    /// Move to another slide; out-of-range targets are ignored
    Navigate(Navigation),

    /// On-screen navigation button clicked
    ButtonPressed(Button),

    // === Application ===
    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,
}

/// On-screen navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Previous,
    Next,
}

impl Button {
    pub fn navigation(self) -> Navigation {
        match self {
            Button::Previous => Navigation::Previous,
            Button::Next => Navigation::Next,
        }
    }
}
