//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State

pub mod actions;
pub mod state;
pub mod reducer;
pub mod event;

// Re-export commonly used types
pub use actions::{Action, Button};
pub use state::{AppState, UiConfig};
pub use reducer::{apply_start, button_enabled, navigation_for_key, reduce};
