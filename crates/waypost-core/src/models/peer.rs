use serde::{Deserialize, Serialize};

use crate::rpc::tl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerKind {
    User,
    Chat,
    Channel,
}

/// Identity of a peer as it appears in replies (no access hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerId {
    pub kind: PeerKind,
    pub id: i64,
}

impl PeerId {
    pub fn from_wire(peer: &tl::Peer) -> Self {
        match *peer {
            tl::Peer::User { user_id } => Self {
                kind: PeerKind::User,
                id: user_id,
            },
            tl::Peer::Chat { chat_id } => Self {
                kind: PeerKind::Chat,
                id: chat_id,
            },
            tl::Peer::Channel { channel_id } => Self {
                kind: PeerKind::Channel,
                id: channel_id,
            },
        }
    }
}

/// A peer the caller wants to address in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerRef {
    /// The acting account
    Myself,
    User { id: i64, access_hash: i64 },
    Chat { id: i64 },
    Channel { id: i64, access_hash: i64 },
}

impl PeerRef {
    pub fn input_peer(&self) -> tl::InputPeer {
        match *self {
            PeerRef::Myself => tl::InputPeer::Myself,
            PeerRef::User { id, access_hash } => tl::InputPeer::User {
                user_id: id,
                access_hash,
            },
            PeerRef::Chat { id } => tl::InputPeer::Chat { chat_id: id },
            PeerRef::Channel { id, access_hash } => tl::InputPeer::Channel {
                channel_id: id,
                access_hash,
            },
        }
    }

    /// `None` for chats and channels, which cannot be addressed as users.
    pub fn input_user(&self) -> Option<tl::InputUser> {
        match *self {
            PeerRef::Myself => Some(tl::InputUser::Myself),
            PeerRef::User { id, access_hash } => Some(tl::InputUser::User {
                user_id: id,
                access_hash,
            }),
            PeerRef::Chat { .. } | PeerRef::Channel { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_is_not_an_input_user() {
        let channel = PeerRef::Channel {
            id: 10,
            access_hash: 99,
        };
        assert!(channel.input_user().is_none());
        assert_eq!(
            channel.input_peer(),
            tl::InputPeer::Channel {
                channel_id: 10,
                access_hash: 99
            }
        );
    }

    #[test]
    fn test_peer_id_from_wire() {
        let id = PeerId::from_wire(&tl::Peer::Chat { chat_id: 5 });
        assert_eq!(id.kind, PeerKind::Chat);
        assert_eq!(id.id, 5);
    }
}
