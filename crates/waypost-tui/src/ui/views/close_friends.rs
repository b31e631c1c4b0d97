use crate::app::App;
use crate::ui::components::{
    modal_area, render_key_hints, render_modal_background, render_modal_header,
    render_modal_search, ModalSize,
};
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub fn render_close_friends_picker(f: &mut Frame, app: &App, area: Rect) {
    let picker = &app.picker;
    let popup_area = modal_area(area, &ModalSize::default());
    render_modal_background(f, popup_area);

    let inner_area = Rect::new(
        popup_area.x + 2,
        popup_area.y + 1,
        popup_area.width.saturating_sub(4),
        popup_area.height.saturating_sub(3),
    );

    let selected_count = picker.working().len();
    let title = if selected_count > 0 {
        format!("Close Friends ({} selected)", selected_count)
    } else {
        "Close Friends".to_string()
    };
    let remaining = render_modal_header(f, inner_area, &title, "esc");
    let remaining = render_modal_search(f, remaining, picker.filter_text(), "Search contacts...");

    let list_area = Rect::new(
        remaining.x,
        remaining.y,
        remaining.width,
        remaining.height.saturating_sub(1),
    );

    let ids = picker.displayed_ids();
    if ids.is_empty() {
        let msg = if picker.filter_text().is_empty() {
            "No contacts."
        } else {
            "No contacts match your search."
        };
        f.render_widget(Paragraph::new(msg).style(theme::text_muted()), list_area);
    } else {
        let visible_height = list_area.height as usize;
        let cursor = app.selector.index.min(ids.len() - 1);
        let scroll_offset = app.selector.scroll_offset(visible_height);

        let items: Vec<ListItem> = ids
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_height)
            .filter_map(|(i, id)| picker.user(*id).map(|user| (i, user)))
            .map(|(i, user)| {
                let is_cursor = i == cursor;
                let is_selected = picker.is_selected(user.id);

                let (checkbox, checkbox_style) = if is_selected {
                    ("[✓] ", Style::default().fg(theme::ACCENT_SUCCESS))
                } else {
                    ("[ ] ", theme::text_muted())
                };
                let border = if is_cursor { "▌" } else { "│" };
                let name_style = if is_cursor {
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else if is_selected {
                    Style::default().fg(theme::ACCENT_SUCCESS)
                } else {
                    theme::text_primary()
                };

                let mut spans = vec![
                    Span::styled(checkbox, checkbox_style),
                    Span::styled(border, Style::default().fg(theme::user_color(user.id))),
                    Span::styled(user.display_name(), name_style),
                ];
                if let Some(username) = user.username.as_deref().filter(|u| !u.is_empty()) {
                    spans.push(Span::styled(format!(" @{}", username), theme::text_muted()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        f.render_widget(List::new(items), list_area);
    }

    let hints_area = Rect::new(
        popup_area.x + 2,
        popup_area.y + popup_area.height.saturating_sub(2),
        popup_area.width.saturating_sub(4),
        1,
    );
    let mut hints = vec![("↑↓", "navigate"), ("Space", "toggle")];
    if picker.submit_visible() {
        hints.push(("Enter", "save"));
    }
    hints.push(("Esc", "cancel"));
    render_key_hints(f, hints_area, &hints);
}
