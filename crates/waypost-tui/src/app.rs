use std::time::{Duration, Instant};

use waypost_core::models::{ContactList, User};
use waypost_core::CoreEvent;

use crate::ui::close_friends::{CloseFriendsPicker, CloseFriendsProps, PickerHost};
use crate::ui::selector::SelectorState;

const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
    shown_at: Instant,
}

/// Save and close requests issued by the picker on commit.
#[derive(Debug, Default)]
pub struct PickerRequests {
    pub save: Option<Vec<i64>>,
    pub close: bool,
}

impl PickerHost for PickerRequests {
    fn save_close_friends(&mut self, user_ids: Vec<i64>) {
        self.save = Some(user_ids);
    }

    fn close(&mut self) {
        self.close = true;
    }
}

pub struct App {
    pub running: bool,
    pub source: String,
    pub current_user_id: i64,
    pub contacts: ContactList,
    pub picker: CloseFriendsPicker,
    /// Cursor and search text of the picker
    pub selector: SelectorState,
    /// Cursor in the contact list behind the picker
    pub list: SelectorState,
    pub picker_open: bool,
    pub pending_save: Option<Vec<i64>>,
    pub status: Option<Status>,
}

impl App {
    pub fn new(source: String, current_user_id: i64, contacts: ContactList) -> Self {
        let mut app = Self {
            running: true,
            source,
            current_user_id,
            contacts,
            picker: CloseFriendsPicker::new(CloseFriendsProps::default()),
            selector: SelectorState::new(),
            list: SelectorState::new(),
            picker_open: false,
            pending_save: None,
            status: None,
        };
        let props = app.picker_props();
        app.picker.set_props(props);
        app
    }

    pub fn picker_props(&self) -> CloseFriendsProps {
        CloseFriendsProps {
            is_active: self.picker_open,
            current_user_id: self.current_user_id,
            users_by_id: self.contacts.users_by_id.clone(),
            user_ids: self.contacts.user_ids.clone(),
        }
    }

    /// Contacts in list order, skipping ids with no user record.
    pub fn contact_rows(&self) -> Vec<&User> {
        self.contacts
            .user_ids
            .iter()
            .filter(|id| **id != self.current_user_id)
            .filter_map(|id| self.contacts.users_by_id.get(id))
            .collect()
    }

    pub fn close_friend_count(&self) -> usize {
        self.picker.baseline().len()
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
        self.selector.clear();
        self.picker.set_filter_text("");
        self.picker.set_active(true);
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
        self.picker.set_active(false);
    }

    pub fn commit_picker(&mut self) {
        let mut requests = PickerRequests::default();
        self.picker.commit(&mut requests);
        if let Some(user_ids) = requests.save {
            self.pending_save = Some(user_ids);
        }
        if requests.close {
            self.close_picker();
        }
    }

    /// Reflect a confirmed save in the local contact set.
    pub fn apply_saved_close_friends(&mut self, user_ids: &[i64]) {
        for user in self.contacts.users_by_id.values_mut() {
            user.is_close_friend = user_ids.contains(&user.id);
        }
        let props = self.picker_props();
        self.picker.set_props(props);
    }

    pub fn handle_core_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::PaymentVerificationNeeded { url } => {
                self.set_status(StatusKind::Info, format!("Verification needed: {}", url));
            }
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(Status {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn expire_status(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.shown_at.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_app() -> App {
        let users = [
            (1, "Me", false),
            (2, "Ada", true),
            (3, "Grace", false),
            (4, "Hedy", false),
        ];
        let users_by_id = users
            .iter()
            .map(|(id, name, close_friend)| {
                (
                    *id,
                    User {
                        id: *id,
                        first_name: Some(name.to_string()),
                        is_close_friend: *close_friend,
                        ..Default::default()
                    },
                )
            })
            .collect();
        let contacts = ContactList {
            user_ids: vec![1, 3, 2, 4],
            users_by_id,
        };
        App::new("test".to_string(), 1, contacts)
    }

    #[test]
    fn test_commit_queues_save_and_closes() {
        let mut app = sample_app();
        app.open_picker();
        app.picker.toggle(3);
        app.commit_picker();

        assert_eq!(app.pending_save, Some(vec![2, 3]));
        assert!(!app.picker_open);
        assert!(!app.picker.is_active());
    }

    #[test]
    fn test_saved_flags_update_baseline() {
        let mut app = sample_app();
        app.apply_saved_close_friends(&[3, 4]);
        assert_eq!(app.picker.baseline(), &[3, 4]);
        assert_eq!(app.close_friend_count(), 2);

        app.open_picker();
        assert_eq!(app.picker.working(), &[3, 4]);
    }

    #[test]
    fn test_contact_rows_skip_self() {
        let app = sample_app();
        let ids: Vec<i64> = app.contact_rows().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
    }
}
