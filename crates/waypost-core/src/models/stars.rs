use serde::Serialize;

use super::peer::{PeerId, PeerRef};
use super::user::User;
use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::rpc::tl;

/// Whole stars plus a fractional part in nanostars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StarsAmount {
    pub amount: i64,
    pub nanos: i32,
}

impl StarsAmount {
    pub fn from_wire(amount: &tl::StarsAmount) -> Self {
        Self {
            amount: amount.amount,
            nanos: amount.nanos,
        }
    }
}

/// Counterparty of a stars transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StarsTransactionPeer {
    Unsupported,
    AppStore,
    PlayMarket,
    PremiumBot,
    Fragment,
    Ads,
    Api,
    Peer(PeerId),
}

impl StarsTransactionPeer {
    pub fn from_wire(peer: &tl::StarsTransactionPeer) -> Self {
        match peer {
            tl::StarsTransactionPeer::Unsupported => Self::Unsupported,
            tl::StarsTransactionPeer::AppStore => Self::AppStore,
            tl::StarsTransactionPeer::PlayMarket => Self::PlayMarket,
            tl::StarsTransactionPeer::PremiumBot => Self::PremiumBot,
            tl::StarsTransactionPeer::Fragment => Self::Fragment,
            tl::StarsTransactionPeer::Ads => Self::Ads,
            tl::StarsTransactionPeer::Api => Self::Api,
            tl::StarsTransactionPeer::Peer { peer } => Self::Peer(PeerId::from_wire(peer)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarsTransaction {
    pub id: String,
    pub stars: StarsAmount,
    pub date: i32,
    pub peer: StarsTransactionPeer,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub is_refund: bool,
    pub is_pending: bool,
    pub is_failed: bool,
    pub is_gift: bool,
    pub is_reaction: bool,
    pub msg_id: Option<i32>,
    pub subscription_period: Option<i32>,
    pub giveaway_post_id: Option<i32>,
    pub transaction_date: Option<i32>,
    pub transaction_url: Option<String>,
}

impl StarsTransaction {
    pub fn from_wire(tx: &tl::StarsTransaction) -> Self {
        Self {
            id: tx.id.clone(),
            stars: StarsAmount::from_wire(&tx.stars),
            date: tx.date,
            peer: StarsTransactionPeer::from_wire(&tx.peer),
            title: tx.title.clone(),
            description: tx.description.clone(),
            photo_url: tx.photo.as_ref().map(|p| p.url().to_string()),
            is_refund: tx.refund,
            is_pending: tx.pending,
            is_failed: tx.failed,
            is_gift: tx.gift,
            is_reaction: tx.reaction,
            msg_id: tx.msg_id,
            subscription_period: tx.subscription_period,
            giveaway_post_id: tx.giveaway_post_id,
            transaction_date: tx.transaction_date,
            transaction_url: tx.transaction_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarsStatus {
    pub balance: StarsAmount,
    pub history: Vec<StarsTransaction>,
    /// Pass back as [`StarsTransactionsQuery::offset`] for the next page
    pub next_offset: Option<String>,
    pub subscriptions_next_offset: Option<String>,
    pub users: Vec<User>,
}

impl StarsStatus {
    pub fn from_wire(status: &tl::StarsStatus) -> Self {
        Self {
            balance: StarsAmount::from_wire(&status.balance),
            history: status
                .history
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(StarsTransaction::from_wire)
                .collect(),
            next_offset: status.next_offset.clone(),
            subscriptions_next_offset: status.subscriptions_next_offset.clone(),
            users: User::list_from_wire(&status.users),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarsTopupOption {
    pub stars: i64,
    pub currency: String,
    pub amount: i64,
    pub store_product: Option<String>,
    /// Only shown once the user expands the option list
    pub is_extended: bool,
}

impl StarsTopupOption {
    pub fn from_wire(option: &tl::StarsTopupOption) -> Self {
        Self {
            stars: option.stars,
            currency: option.currency.clone(),
            amount: option.amount,
            store_product: option.store_product.clone(),
            is_extended: option.extended,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionDirection {
    #[default]
    All,
    Inbound,
    Outbound,
}

/// One page of a stars history listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarsTransactionsQuery {
    pub peer: PeerRef,
    pub direction: TransactionDirection,
    pub ascending: bool,
    pub subscription_id: Option<String>,
    pub offset: String,
    pub limit: i32,
}

impl StarsTransactionsQuery {
    /// First page of the acting account's history, newest first.
    pub fn new(peer: PeerRef) -> Self {
        Self {
            peer,
            direction: TransactionDirection::All,
            ascending: false,
            subscription_id: None,
            offset: String::new(),
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn to_request(&self) -> crate::rpc::methods::GetStarsTransactions {
        crate::rpc::methods::GetStarsTransactions {
            inbound: self.direction == TransactionDirection::Inbound,
            outbound: self.direction == TransactionDirection::Outbound,
            ascending: self.ascending,
            subscription_id: self.subscription_id.clone(),
            peer: self.peer.input_peer(),
            offset: self.offset.clone(),
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeerKind;

    #[test]
    fn test_status_without_history_is_empty() {
        let wire: tl::StarsStatus = serde_json::from_value(serde_json::json!({
            "balance": { "amount": "9007199254740993", "nanos": 5 },
        }))
        .unwrap();

        let status = StarsStatus::from_wire(&wire);
        assert_eq!(status.balance.amount, 9_007_199_254_740_993);
        assert_eq!(status.balance.nanos, 5);
        assert!(status.history.is_empty());
        assert!(status.next_offset.is_none());
    }

    #[test]
    fn test_transaction_peer_translation() {
        let wire: tl::StarsTransactionPeer = serde_json::from_value(serde_json::json!({
            "_": "starsTransactionPeer",
            "peer": { "_": "peerChannel", "channel_id": "42" },
        }))
        .unwrap();

        assert_eq!(
            StarsTransactionPeer::from_wire(&wire),
            StarsTransactionPeer::Peer(PeerId {
                kind: PeerKind::Channel,
                id: 42,
            })
        );
    }

    #[test]
    fn test_query_direction_flags() {
        let mut query = StarsTransactionsQuery::new(PeerRef::Myself);
        let request = query.to_request();
        assert!(!request.inbound && !request.outbound);
        assert_eq!(request.limit, DEFAULT_PAGE_LIMIT);

        query.direction = TransactionDirection::Outbound;
        let request = query.to_request();
        assert!(!request.inbound);
        assert!(request.outbound);
    }
}
