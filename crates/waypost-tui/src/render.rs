use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::ui;

pub fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    ui::views::render_contacts(f, app, f.area());

    if app.picker_open {
        ui::views::render_close_friends_picker(f, app, f.area());
    }
}
