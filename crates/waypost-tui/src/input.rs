use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    if app.picker_open {
        handle_close_friends_key(app, key);
    } else {
        handle_contacts_key(app, key);
    }
}

fn handle_contacts_key(app: &mut App, key: KeyEvent) {
    let row_count = app.contact_rows().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('f') | KeyCode::Enter => app.open_picker(),
        KeyCode::Up | KeyCode::Char('k') => app.list.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.list.move_down(row_count),
        _ => {}
    }
}

fn handle_close_friends_key(app: &mut App, key: KeyEvent) {
    // Ctrl/Alt combos must not leak into the search text
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }

    let item_count = app.picker.displayed_ids().len();
    match key.code {
        KeyCode::Esc => app.close_picker(),
        KeyCode::Enter => {
            if app.picker.submit_visible() {
                app.commit_picker();
            }
        }
        KeyCode::Up => app.selector.move_up(),
        KeyCode::Down => app.selector.move_down(item_count),
        KeyCode::Char(' ') => {
            if let Some(&user_id) = app.picker.displayed_ids().get(app.selector.index) {
                app.picker.toggle(user_id);
            }
        }
        KeyCode::Char(c) => {
            app.selector.add_filter_char(c);
            app.picker.set_filter_text(&app.selector.filter);
        }
        KeyCode::Backspace => {
            if app.selector.backspace_filter() {
                app.picker.set_filter_text(&app.selector.filter);
            }
        }
        _ => {}
    }
    app.selector.clamp_index(app.picker.displayed_ids().len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_ignored_until_selection_changes() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('f'));
        assert!(app.picker_open);

        press(&mut app, KeyCode::Enter);
        assert!(app.picker_open);
        assert!(app.pending_save.is_none());

        // Cursor starts on the close friend; untick and confirm
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(!app.picker_open);
        assert_eq!(app.pending_save, Some(vec![]));
    }

    #[test]
    fn test_escape_closes_without_saving() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Esc);

        assert!(!app.picker_open);
        assert!(app.pending_save.is_none());
        assert!(app.running);
    }

    #[test]
    fn test_typing_filters_and_toggles_match() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "hed");
        assert_eq!(app.picker.filter_text(), "hed");
        assert_eq!(app.picker.displayed_ids(), &[2, 4]);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.picker.working(), &[2, 4]);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.picker.filter_text(), "he");
        assert_eq!(app.selector.index, 0);
    }

    #[test]
    fn test_ctrl_c_quits_from_picker() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('f'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }
}
