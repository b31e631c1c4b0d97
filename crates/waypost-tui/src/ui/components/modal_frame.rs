use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

const MODAL_PADDING_H: u16 = 2;

/// Configuration for modal sizing
pub struct ModalSize {
    /// Maximum width in columns (capped by terminal width - 4)
    pub max_width: u16,
    /// Height as a fraction of terminal height
    pub height_percent: f32,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self {
            max_width: 70,
            height_percent: 0.7,
        }
    }
}

fn with_modal_padding(area: Rect) -> Rect {
    Rect {
        x: area.x + MODAL_PADDING_H,
        y: area.y,
        width: area.width.saturating_sub(MODAL_PADDING_H * 2),
        height: area.height,
    }
}

/// Centered modal area
pub fn modal_area(terminal_area: Rect, size: &ModalSize) -> Rect {
    let popup_width = size.max_width.min(terminal_area.width.saturating_sub(4));
    let popup_height = (terminal_area.height as f32 * size.height_percent) as u16;
    let popup_x = terminal_area.x + (terminal_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = terminal_area.y + (terminal_area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    let bg_block = Block::default().style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(bg_block, area);
}

/// Title on the left, hint on the right. Returns the area below the header.
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let header_area = with_modal_padding(chunks[0]);

    let spacing = (header_area.width as usize)
        .saturating_sub(title.chars().count() + hint.chars().count());

    let header_line = Line::from(vec![
        Span::styled(title, theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint, theme::modal_hint()),
    ]);
    f.render_widget(Paragraph::new(header_line), header_area);

    chunks[1]
}

/// Search line showing `filter`, or `placeholder` when empty.
/// Returns the area below it.
pub fn render_modal_search(f: &mut Frame, area: Rect, filter: &str, placeholder: &str) -> Rect {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let search_area = with_modal_padding(chunks[0]);

    let line = if filter.is_empty() {
        let mut chars = placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        Line::from(vec![
            Span::styled(first, theme::modal_search_active()),
            Span::styled(chars.as_str(), theme::modal_search_placeholder()),
        ])
    } else {
        Line::from(Span::styled(filter, theme::modal_search_active()))
    };
    f.render_widget(Paragraph::new(line), search_area);

    chunks[1]
}

/// One line of `key action · key action` hints.
pub fn render_key_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme::text_muted()));
        }
        spans.push(Span::styled(*key, theme::key_hint()));
        spans.push(Span::styled(format!(" {}", action), theme::text_muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
