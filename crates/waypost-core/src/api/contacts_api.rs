use super::*;
use crate::models::ContactList;
use crate::rpc::methods::{EditCloseFriends, GetContacts};
use crate::rpc::tl;

impl<T: Transport> CoreApi<T> {
    /// Full contact list. An unchanged list (`contactsNotModified`) is `None`.
    pub async fn get_contacts(&self) -> Result<Option<ContactList>, RpcError> {
        match self.invoke(&GetContacts { hash: 0 }).await? {
            None | Some(tl::Contacts::NotModified) => Ok(None),
            Some(tl::Contacts::Contacts {
                contacts, users, ..
            }) => Ok(Some(ContactList::from_wire(&contacts, &users))),
        }
    }

    /// Replace the close friends list with `user_ids`.
    pub async fn edit_close_friends(&self, user_ids: &[i64]) -> Result<Option<bool>, RpcError> {
        tracing::info!(count = user_ids.len(), "saving close friends");
        let request = EditCloseFriends {
            id: user_ids.to_vec(),
        };
        self.invoke(&request).await
    }
}
