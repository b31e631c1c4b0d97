use std::path::PathBuf;

use anyhow::{anyhow, Result};
use waypost_core::models::ContactList;
use waypost_core::rpc::HttpTransport;
use waypost_core::CoreApi;

use crate::contacts_file::ContactsFile;

/// Where contacts come from and where the close friends list is saved.
pub enum ContactsBackend {
    File(PathBuf),
    Remote {
        api: CoreApi<HttpTransport>,
        /// Falls back to the contact flagged `is_self` when unset
        current_user_id: Option<i64>,
    },
}

impl ContactsBackend {
    pub fn describe(&self) -> String {
        match self {
            ContactsBackend::File(path) => path.display().to_string(),
            ContactsBackend::Remote { api, .. } => api.transport().endpoint().to_string(),
        }
    }

    /// Returns the acting user's id and the contact list.
    pub async fn load(&self) -> Result<(i64, ContactList)> {
        match self {
            ContactsBackend::File(path) => {
                let file = ContactsFile::load(path)?;
                Ok((file.current_user_id, file.contact_list()))
            }
            ContactsBackend::Remote {
                api,
                current_user_id,
            } => {
                let contacts = api
                    .get_contacts()
                    .await?
                    .ok_or_else(|| anyhow!("Server returned no contacts"))?;
                let current_user_id = resolve_current_user(*current_user_id, &contacts)?;
                Ok((current_user_id, contacts))
            }
        }
    }

    /// `Ok(false)` when the server produced no confirmation.
    pub async fn save_close_friends(&self, user_ids: &[i64]) -> Result<bool> {
        match self {
            ContactsBackend::File(path) => {
                let mut file = ContactsFile::load(path)?;
                file.set_close_friends(user_ids);
                file.save(path)?;
                Ok(true)
            }
            ContactsBackend::Remote { api, .. } => {
                Ok(api.edit_close_friends(user_ids).await? == Some(true))
            }
        }
    }
}

fn resolve_current_user(explicit: Option<i64>, contacts: &ContactList) -> Result<i64> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    contacts
        .users_by_id
        .values()
        .find(|user| user.is_self)
        .map(|user| user.id)
        .ok_or_else(|| anyhow!("Signed-in user not among contacts; pass --self-id"))
}
