use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rpc::tl;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub access_hash: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub is_contact: bool,
    #[serde(default)]
    pub is_mutual_contact: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_close_friend: bool,
}

impl User {
    /// `userEmpty` carries no usable data and maps to `None`.
    pub fn from_wire(user: &tl::User) -> Option<Self> {
        let tl::User::User(data) = user else {
            return None;
        };

        Some(Self {
            id: data.id,
            access_hash: data.access_hash,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            username: data.username.clone(),
            phone: data.phone.clone(),
            is_self: data.is_self,
            is_contact: data.contact,
            is_mutual_contact: data.mutual_contact,
            is_bot: data.bot,
            is_premium: data.premium,
            is_close_friend: data.close_friend,
        })
    }

    pub fn list_from_wire(users: &[tl::User]) -> Vec<Self> {
        users.iter().filter_map(Self::from_wire).collect()
    }

    /// "First Last", falling back to the username and then the id
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            name
        } else if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            format!("@{}", username)
        } else {
            self.id.to_string()
        }
    }

    /// Case-insensitive substring match on display name and username.
    /// An empty (or whitespace-only) query matches everyone.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        if self.display_name().to_lowercase().contains(&query) {
            return true;
        }

        self.username
            .as_deref()
            .map(|u| u.to_lowercase().contains(query.trim_start_matches('@')))
            .unwrap_or(false)
    }
}

/// Contacts in server order plus the users they refer to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactList {
    pub user_ids: Vec<i64>,
    pub users_by_id: HashMap<i64, User>,
}

impl ContactList {
    pub fn from_wire(contacts: &[tl::Contact], users: &[tl::User]) -> Self {
        let users_by_id = User::list_from_wire(users)
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Self {
            user_ids: contacts.iter().map(|c| c.user_id).collect(),
            users_by_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first: &str, last: Option<&str>, username: Option<&str>) -> User {
        User {
            id,
            first_name: Some(first.to_string()),
            last_name: last.map(str::to_string),
            username: username.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(user(1, "Ada", Some("Lovelace"), None).display_name(), "Ada Lovelace");

        let mut nameless = user(2, "", None, Some("grace"));
        assert_eq!(nameless.display_name(), "@grace");

        nameless.username = None;
        assert_eq!(nameless.display_name(), "2");
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let ada = user(1, "Ada", Some("Lovelace"), Some("countess"));
        assert!(ada.matches_query("love"));
        assert!(ada.matches_query("ADA L"));
        assert!(ada.matches_query("@count"));
        assert!(ada.matches_query("  "));
        assert!(!ada.matches_query("babbage"));
    }

    #[test]
    fn test_empty_wire_user_is_dropped() {
        let users = vec![
            tl::User::Empty { id: 3 },
            tl::User::User(tl::UserData {
                id: 4,
                access_hash: Some(44),
                first_name: Some("Alan".to_string()),
                last_name: None,
                username: None,
                phone: None,
                is_self: false,
                contact: true,
                mutual_contact: false,
                bot: false,
                premium: false,
                close_friend: true,
            }),
        ];

        let parsed = User::list_from_wire(&users);
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].is_close_friend);
        assert!(parsed[0].is_contact);
    }

    #[test]
    fn test_contact_list_keeps_server_order() {
        let contacts = vec![
            tl::Contact { user_id: 9, mutual: false },
            tl::Contact { user_id: 3, mutual: true },
        ];
        let list = ContactList::from_wire(&contacts, &[]);
        assert_eq!(list.user_ids, vec![9, 3]);
        assert!(list.users_by_id.is_empty());
    }
}
