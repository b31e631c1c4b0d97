// Colors and styles shared by every view

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Modal background, slightly lifted from the app background
pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

pub const BG_MODAL_OVERLAY: Color = Color::Rgb(10, 10, 12);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

// =============================================================================
// USER COLORS
// =============================================================================

pub const USER_PALETTE: [Color; 8] = [
    Color::Rgb(86, 156, 214),
    Color::Rgb(106, 153, 85),
    Color::Rgb(206, 145, 120),
    Color::Rgb(169, 154, 203),
    Color::Rgb(220, 180, 100),
    Color::Rgb(78, 201, 176),
    Color::Rgb(214, 112, 160),
    Color::Rgb(150, 170, 190),
];

/// Stable color per user id
pub fn user_color(user_id: i64) -> Color {
    USER_PALETTE[user_id.unsigned_abs() as usize % USER_PALETTE.len()]
}

// =============================================================================
// STYLES
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn status_success() -> Style {
    Style::default().fg(ACCENT_SUCCESS)
}

pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn modal_search_placeholder() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn modal_search_active() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn key_hint() -> Style {
    Style::default().fg(ACCENT_WARNING)
}
