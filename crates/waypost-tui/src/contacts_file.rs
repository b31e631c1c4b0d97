//! Local contacts snapshot used when no RPC endpoint is configured.
//!
//! ```json
//! { "current_user_id": 1, "user_ids": [2, 3], "users": [{ "id": 2, "first_name": "Ada", "is_close_friend": true }] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use waypost_core::models::{ContactList, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactsFile {
    pub current_user_id: i64,
    /// Contacts in display order
    #[serde(default)]
    pub user_ids: Vec<i64>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl ContactsFile {
    /// `<data dir>/waypost/contacts.json`
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("waypost")
            .join("contacts.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read contacts file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid contacts file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write contacts file {}", path.display()))
    }

    /// Mark exactly `user_ids` as close friends.
    pub fn set_close_friends(&mut self, user_ids: &[i64]) {
        for user in &mut self.users {
            user.is_close_friend = user_ids.contains(&user.id);
        }
    }

    pub fn contact_list(&self) -> ContactList {
        let users_by_id: HashMap<i64, User> =
            self.users.iter().map(|u| (u.id, u.clone())).collect();
        ContactList {
            user_ids: self.user_ids.clone(),
            users_by_id,
        }
    }
}
