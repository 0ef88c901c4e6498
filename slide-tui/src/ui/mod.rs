//! UI rendering
//!
//! Rendering functions that transform state into terminal frames.
//! Nothing here mutates state; the main loop owns the terminal.

pub mod layout;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};
use crate::app::{button_enabled, AppState, Button};
use layout::{centered_rect, ViewLayout};

/// Glyphs with an ASCII fallback
struct Symbols {
    previous: &'static str,
    next: &'static str,
    bullet: &'static str,
    separator: &'static str,
    arrows: &'static str,
}

impl Symbols {
    fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                previous: "← Previous",
                next: "Next →",
                bullet: "•",
                separator: " · ",
                arrows: "← →",
            }
        } else {
            Self {
                previous: "<- Previous",
                next: "Next ->",
                bullet: "*",
                separator: " | ",
                arrows: "Left Right",
            }
        }
    }
}

/// Colors, or plain styles when colors are disabled
struct Palette {
    colors: bool,
}

impl Palette {
    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    fn accent(&self) -> Style {
        self.fg(Color::LightBlue)
    }

    fn heading(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    fn text(&self) -> Style {
        self.fg(Color::White)
    }

    fn muted(&self) -> Style {
        self.fg(Color::Gray)
    }

    fn disabled(&self) -> Style {
        self.fg(Color::DarkGray)
    }
}

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = ViewLayout::new(area);
    let symbols = Symbols::new(state.config.unicode_enabled);
    let palette = Palette { colors: state.config.colors_enabled };

    render_header(frame, layout.header, state, &palette);
    render_slide(frame, layout.body, state, &symbols, &palette);
    render_button(frame, layout.previous, state, Button::Previous, &symbols, &palette);
    render_button(frame, layout.next, state, Button::Next, &symbols, &palette);
    render_hints(frame, layout.hints, state, &symbols, &palette);

    if state.help_visible {
        render_help_overlay(frame, area, &symbols, &palette);
    }
}

/// Deck eyebrow and title on the left, position and progress on the right
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(inner);

    let titles = Paragraph::new(vec![
        Line::from(Span::styled(
            state.deck.eyebrow().to_uppercase(),
            palette.accent(),
        )),
        Line::from(Span::styled(
            state.deck.title(),
            palette.heading(),
        )),
    ]);
    frame.render_widget(titles, columns[0]);

    let status = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(columns[1]);

    let position = Paragraph::new(Span::styled(
        state.position().to_string(),
        palette.accent().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(position, status[0]);

    let progress = state.progress();
    let gauge = Gauge::default()
        .percent(u16::from(progress))
        .label(format!("{}%", progress))
        .use_unicode(state.config.unicode_enabled)
        .gauge_style(palette.accent());
    frame.render_widget(gauge, status[1]);
}

/// Current slide: title, bullets in deck order, then the footnote if present
fn render_slide(frame: &mut Frame, area: Rect, state: &AppState, symbols: &Symbols, palette: &Palette) {
    let slide = state.current_slide();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title_bottom(Line::from(" F1: Help ").right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footnote = slide.footnote();
    let footnote_height = footnote
        .map(|text| footnote_height(text, inner))
        .unwrap_or(0);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footnote_height)])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(slide.title.as_str(), palette.heading())),
        Line::from(""),
    ];
    for (i, bullet) in slide.bullets.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbols.bullet), palette.accent()),
            Span::styled(bullet.as_str(), palette.text()),
        ]));
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, sections[0]);

    if let Some(text) = footnote {
        let note = Paragraph::new(Span::styled(text, palette.muted()))
            .block(Block::default()
                .borders(Borders::ALL)
                .border_style(palette.accent()))
            .wrap(Wrap { trim: true });
        frame.render_widget(note, sections[1]);
    }
}

/// Bordered height of a footnote wrapped to the body width, capped at half the body
fn footnote_height(text: &str, body: Rect) -> u16 {
    let width = usize::from(body.width.saturating_sub(2).max(1));
    let lines = text.chars().count().div_ceil(width).max(1);
    let height = u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2);
    height.min(body.height / 2)
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    button: Button,
    symbols: &Symbols,
    palette: &Palette,
) {
    let label = match button {
        Button::Previous => symbols.previous,
        Button::Next => symbols.next,
    };

    let (border, text) = if button_enabled(state, button) {
        (palette.accent(), palette.text().add_modifier(Modifier::BOLD))
    } else {
        (palette.disabled(), palette.disabled())
    };

    let widget = Paragraph::new(Span::styled(label, text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}

/// Keyboard hint and deck sources
fn render_hints(frame: &mut Frame, area: Rect, state: &AppState, symbols: &Symbols, palette: &Palette) {
    let mut parts = vec![format!("Keyboard: {} Home End", symbols.arrows)];
    if !state.deck.sources().is_empty() {
        parts.push(format!("Sources: {}", state.deck.sources_line(symbols.separator)));
    }

    let hints = Paragraph::new(Span::styled(parts.join(symbols.separator), palette.muted()))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).border_style(palette.disabled()));
    frame.render_widget(hints, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, symbols: &Symbols, palette: &Palette) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Slides:"),
        Line::from("  Right, PageDown  - Next slide"),
        Line::from("  Left, PageUp     - Previous slide"),
        Line::from("  Home             - First slide"),
        Line::from("  End              - Last slide"),
        Line::from(""),
        Line::from("Mouse:"),
        Line::from(format!("  Click {} / {}", symbols.previous, symbols.next)),
        Line::from("  m                - Toggle mouse capture"),
        Line::from(""),
        Line::from("General:"),
        Line::from("  F1, ?            - Toggle help"),
        Line::from("  q, Esc           - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(palette.fg(Color::Cyan)))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}
