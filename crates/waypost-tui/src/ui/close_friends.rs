//! Close friends picker: a filtered multi-select over the contact list.
//!
//! The picker only holds selection state. Saving and closing are delegated to
//! a [`PickerHost`] when the user confirms.

use std::collections::{HashMap, HashSet};

use waypost_core::models::User;

/// Inputs supplied by the container that shows the picker.
#[derive(Debug, Clone, Default)]
pub struct CloseFriendsProps {
    pub is_active: bool,
    pub current_user_id: i64,
    pub users_by_id: HashMap<i64, User>,
    /// Contacts in display order
    pub user_ids: Vec<i64>,
}

/// Collaborator that persists the selection and dismisses the picker.
pub trait PickerHost {
    fn save_close_friends(&mut self, user_ids: Vec<i64>);
    fn close(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    Inactive,
    Active,
}

#[derive(Debug, Clone)]
pub struct CloseFriendsPicker {
    phase: PickerPhase,
    current_user_id: i64,
    users_by_id: HashMap<i64, User>,
    user_ids: Vec<i64>,
    baseline: Vec<i64>,
    working: Vec<i64>,
    filter_text: String,
    displayed_ids: Vec<i64>,
    submit_visible: bool,
}

impl CloseFriendsPicker {
    pub fn new(props: CloseFriendsProps) -> Self {
        let mut picker = Self {
            phase: PickerPhase::Inactive,
            current_user_id: props.current_user_id,
            users_by_id: HashMap::new(),
            user_ids: Vec::new(),
            baseline: Vec::new(),
            working: Vec::new(),
            filter_text: String::new(),
            displayed_ids: Vec::new(),
            submit_visible: false,
        };
        picker.update_contacts(props.users_by_id, props.user_ids);
        picker.set_active(props.is_active);
        picker
    }

    /// Apply a full set of new props from the container.
    pub fn set_props(&mut self, props: CloseFriendsProps) {
        self.current_user_id = props.current_user_id;
        self.update_contacts(props.users_by_id, props.user_ids);
        self.set_active(props.is_active);
    }

    /// Only the Inactive -> Active edge resets the working selection.
    pub fn set_active(&mut self, is_active: bool) {
        match (self.phase, is_active) {
            (PickerPhase::Inactive, true) => {
                self.working = self.baseline.clone();
                self.submit_visible = false;
                self.phase = PickerPhase::Active;
                tracing::debug!(baseline = self.baseline.len(), "close friends picker opened");
            }
            (PickerPhase::Active, false) => {
                self.phase = PickerPhase::Inactive;
            }
            _ => {}
        }
    }

    /// Replace the contact set. The working selection is left alone.
    pub fn update_contacts(&mut self, users_by_id: HashMap<i64, User>, user_ids: Vec<i64>) {
        self.users_by_id = users_by_id;
        self.user_ids = user_ids;
        self.baseline = self.compute_baseline();
        self.recompute_displayed();
    }

    pub fn set_filter_text(&mut self, text: &str) {
        self.filter_text = text.to_string();
        self.recompute_displayed();
    }

    /// Replace the working selection. Always reveals the submit control,
    /// even when `user_ids` equals the baseline.
    pub fn change_selection(&mut self, user_ids: Vec<i64>) {
        self.working = user_ids;
        self.submit_visible = true;
    }

    pub fn toggle(&mut self, user_id: i64) {
        let mut next = self.working.clone();
        match next.iter().position(|id| *id == user_id) {
            Some(pos) => {
                next.remove(pos);
            }
            None => next.push(user_id),
        }
        self.change_selection(next);
    }

    /// Save the working selection, then ask the host to close.
    pub fn commit<H: PickerHost + ?Sized>(&self, host: &mut H) {
        tracing::info!(count = self.working.len(), "committing close friends");
        host.save_close_friends(self.working.clone());
        host.close();
    }

    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == PickerPhase::Active
    }

    pub fn baseline(&self) -> &[i64] {
        &self.baseline
    }

    pub fn working(&self) -> &[i64] {
        &self.working
    }

    pub fn is_selected(&self, user_id: i64) -> bool {
        self.working.contains(&user_id)
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn displayed_ids(&self) -> &[i64] {
        &self.displayed_ids
    }

    pub fn submit_visible(&self) -> bool {
        self.submit_visible
    }

    pub fn user(&self, user_id: i64) -> Option<&User> {
        self.users_by_id.get(&user_id)
    }

    /// Close friends in contact order; ones missing from the ordered list
    /// follow by ascending id.
    fn compute_baseline(&self) -> Vec<i64> {
        let is_candidate = |id: i64| {
            id != self.current_user_id
                && self
                    .users_by_id
                    .get(&id)
                    .is_some_and(|user| user.is_close_friend)
        };

        let mut seen = HashSet::new();
        let mut baseline: Vec<i64> = self
            .user_ids
            .iter()
            .copied()
            .filter(|id| is_candidate(*id) && seen.insert(*id))
            .collect();

        let mut unlisted: Vec<i64> = self
            .users_by_id
            .keys()
            .copied()
            .filter(|id| is_candidate(*id) && !seen.contains(id))
            .collect();
        unlisted.sort_unstable();

        baseline.extend(unlisted);
        baseline
    }

    fn recompute_displayed(&mut self) {
        let mut seen = HashSet::new();
        let matching = self.user_ids.iter().copied().filter(|id| {
            self.users_by_id
                .get(id)
                .is_some_and(|user| user.matches_query(&self.filter_text))
        });

        let displayed = self
            .baseline
            .iter()
            .copied()
            .chain(matching)
            .filter(|id| *id != self.current_user_id && seen.insert(*id))
            .collect();
        self.displayed_ids = displayed;
    }
}
