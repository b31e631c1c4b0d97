use super::gifts::PremiumGiftCodeOption;
use super::peer::PeerRef;
use crate::rpc::tl;

/// What the buyer is paying for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceRequest {
    /// Invoice attached to a message
    Message { peer: PeerRef, msg_id: i32 },
    /// Invoice shared by link (`t.me/$slug`)
    Slug { slug: String },
    StarsTopup {
        stars: i64,
        currency: String,
        amount: i64,
    },
    StarsGift {
        user: PeerRef,
        stars: i64,
        currency: String,
        amount: i64,
    },
    PremiumGiftCode {
        users: Vec<PeerRef>,
        boost_channel: Option<PeerRef>,
        option: PremiumGiftCodeOption,
    },
    StarGift {
        peer: PeerRef,
        gift_id: i64,
        hide_name: bool,
        include_upgrade: bool,
        message: Option<String>,
    },
}

impl InvoiceRequest {
    pub fn to_input_invoice(&self) -> tl::InputInvoice {
        match self {
            InvoiceRequest::Message { peer, msg_id } => tl::InputInvoice::Message {
                peer: peer.input_peer(),
                msg_id: *msg_id,
            },
            InvoiceRequest::Slug { slug } => tl::InputInvoice::Slug { slug: slug.clone() },
            InvoiceRequest::StarsTopup {
                stars,
                currency,
                amount,
            } => tl::InputInvoice::Stars {
                purpose: tl::InputStorePaymentPurpose::StarsTopup {
                    stars: *stars,
                    currency: currency.clone(),
                    amount: *amount,
                },
            },
            InvoiceRequest::StarsGift {
                user,
                stars,
                currency,
                amount,
            } => tl::InputInvoice::Stars {
                purpose: tl::InputStorePaymentPurpose::StarsGift {
                    user_id: user.input_user().unwrap_or(tl::InputUser::Empty),
                    stars: *stars,
                    currency: currency.clone(),
                    amount: *amount,
                },
            },
            InvoiceRequest::PremiumGiftCode {
                users,
                boost_channel,
                option,
            } => tl::InputInvoice::PremiumGiftCode {
                purpose: tl::InputStorePaymentPurpose::PremiumGiftCode {
                    users: users.iter().filter_map(PeerRef::input_user).collect(),
                    boost_peer: boost_channel.as_ref().map(PeerRef::input_peer),
                    currency: option.currency.clone(),
                    amount: option.amount,
                },
                option: option.to_wire(),
            },
            InvoiceRequest::StarGift {
                peer,
                gift_id,
                hide_name,
                include_upgrade,
                message,
            } => tl::InputInvoice::StarGift {
                hide_name: *hide_name,
                include_upgrade: *include_upgrade,
                peer: peer.input_peer(),
                gift_id: *gift_id,
                message: message.as_ref().map(|text| tl::TextWithEntities {
                    text: text.clone(),
                    entities: Vec::new(),
                }),
            },
        }
    }
}

/// Purpose of a prepaid giveaway being launched in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveawayPurpose {
    pub boost_channel: PeerRef,
    pub additional_channels: Vec<PeerRef>,
    pub countries: Vec<String>,
    pub prize_description: Option<String>,
    pub only_new_subscribers: bool,
    pub winners_are_visible: bool,
    pub until_date: i32,
    pub currency: String,
    pub amount: i64,
    /// Client-chosen id that makes the request idempotent server-side
    pub random_id: i64,
}

impl GiveawayPurpose {
    pub fn to_wire(&self) -> tl::InputStorePaymentPurpose {
        tl::InputStorePaymentPurpose::PremiumGiveaway {
            only_new_subscribers: self.only_new_subscribers,
            winners_are_visible: self.winners_are_visible,
            boost_peer: self.boost_channel.input_peer(),
            additional_peers: self
                .additional_channels
                .iter()
                .map(PeerRef::input_peer)
                .collect(),
            countries_iso2: self.countries.clone(),
            prize_description: self.prize_description.clone(),
            random_id: self.random_id,
            until_date: self.until_date,
            currency: self.currency.clone(),
            amount: self.amount,
        }
    }
}
