use crate::app::{App, StatusKind};
use crate::ui::components::render_key_hints;
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Contact list with close friends starred, plus the status line.
pub fn render_contacts(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled("Contacts", theme::modal_title()),
        Span::styled(
            format!(
                "  {} close friends · {}",
                app.close_friend_count(),
                app.source
            ),
            theme::text_muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let rows = app.contact_rows();
    let visible_height = chunks[1].height as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(app.list.scroll_offset(visible_height))
        .take(visible_height)
        .map(|(i, user)| {
            let marker = if user.is_close_friend {
                Span::styled("★ ", Style::default().fg(theme::ACCENT_SUCCESS))
            } else {
                Span::raw("  ")
            };
            let name_style = if i == app.list.index {
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::text_primary()
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(user.display_name(), name_style),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    if let Some(status) = &app.status {
        let style = match status.kind {
            StatusKind::Info => theme::status_success(),
            StatusKind::Error => theme::status_error(),
        };
        f.render_widget(
            Paragraph::new(Span::styled(status.message.as_str(), style)),
            chunks[2],
        );
    }

    render_key_hints(
        f,
        chunks[3],
        &[("↑↓", "move"), ("f", "edit close friends"), ("q", "quit")],
    );
}
