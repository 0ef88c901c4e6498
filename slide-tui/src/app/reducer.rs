//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`
//!
//! The reducer has no side effects; it only computes new state values.
//! Terminal I/O (mouse capture, drawing) happens in the main loop.

use super::actions::{Action, Button};
use super::state::AppState;
use crate::ui::layout::hit_test;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use libslidecast::Navigation;
use ratatui::layout::Rect;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// Deterministic: same inputs -> same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(mouse) => handle_mouse(state, mouse),
        Action::Tick => state,
        Action::Resize(width, height) => AppState {
            viewport: Rect::new(0, 0, width, height),
            ..state
        },

        // === Slide Navigation ===
        Action::Navigate(navigation) => {
            let mut presentation = state.presentation;
            presentation.navigate(navigation);
            AppState {
                presentation,
                ..state
            }
        }

        Action::ButtonPressed(button) => reduce(state, Action::Navigate(button.navigation())),

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => AppState {
            mouse_enabled: !state.mouse_enabled,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },
    }
}

/// Open the viewer at a 1-based slide number; out-of-range numbers are ignored
pub fn apply_start(state: AppState, start: Option<i64>) -> AppState {
    match start {
        Some(number) => reduce(state, Action::Navigate(Navigation::to_slide(number))),
        None => state,
    }
}

/// Map a key to its slide navigation, if it has one
///
/// | Key              | Navigation |
/// |------------------|------------|
/// | Right, PageDown  | next       |
/// | Left, PageUp     | previous   |
/// | Home             | first      |
/// | End              | last       |
pub fn navigation_for_key(code: KeyCode) -> Option<Navigation> {
    match code {
        KeyCode::Right | KeyCode::PageDown => Some(Navigation::Next),
        KeyCode::Left | KeyCode::PageUp => Some(Navigation::Previous),
        KeyCode::Home => Some(Navigation::First),
        KeyCode::End => Some(Navigation::Last),
        _ => None,
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
/// The help overlay is modal: slide navigation is ignored while it is open.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    if let Some(navigation) = navigation_for_key(key.code) {
        if state.help_visible {
            return state;
        }
        return reduce(state, Action::Navigate(navigation));
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => reduce(state, Action::Quit),

        // Raw mode swallows SIGINT
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => reduce(state, Action::Quit),

        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            reduce(state, action)
        }

        (KeyCode::Esc, _) if state.help_visible => reduce(state, Action::HideHelp),
        (KeyCode::Esc, _) => reduce(state, Action::Quit),

        (KeyCode::Char('m'), KeyModifiers::NONE) => reduce(state, Action::ToggleMouse),

        _ => state,
    }
}

/// Handle mouse input
///
/// Only left-button presses on a navigation button do anything, and only
/// while the help overlay is closed.
fn handle_mouse(state: AppState, mouse: MouseEvent) -> AppState {
    if !state.mouse_enabled || state.help_visible {
        return state;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hit_test(state.viewport, mouse.column, mouse.row) {
                Some(button) => reduce(state, Action::ButtonPressed(button)),
                None => state,
            }
        }
        _ => state,
    }
}

/// Whether clicking `button` would change the slide
pub fn button_enabled(state: &AppState, button: Button) -> bool {
    match button {
        Button::Previous => !state.presentation.is_first(),
        Button::Next => !state.presentation.is_last(),
    }
}
