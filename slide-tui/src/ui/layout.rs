//! Screen layout shared by rendering and mouse hit-testing
//!
//! The layout depends only on the terminal area, so the reducer can find
//! which button a click landed on without access to the frame.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::app::Button;

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;
pub const PREVIOUS_WIDTH: u16 = 16;
pub const NEXT_WIDTH: u16 = 12;

/// Areas of the viewer screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub header: Rect,
    pub body: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub hints: Rect,
}

impl ViewLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PREVIOUS_WIDTH),
                Constraint::Length(1),
                Constraint::Length(NEXT_WIDTH),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(rows[2]);

        Self {
            header: rows[0],
            body: rows[1],
            previous: footer[0],
            next: footer[2],
            hints: footer[4],
        }
    }

    pub fn button_area(&self, button: Button) -> Rect {
        match button {
            Button::Previous => self.previous,
            Button::Next => self.next,
        }
    }
}

/// Button under the terminal cell at (`column`, `row`), if any
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Button> {
    let layout = ViewLayout::new(area);
    let position = Position::new(column, row);

    [Button::Previous, Button::Next]
        .into_iter()
        .find(|&button| layout.button_area(button).contains(position))
}

/// Helper to create centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
