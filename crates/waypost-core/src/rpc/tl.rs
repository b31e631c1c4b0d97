//! Wire shapes of the TL objects this crate exchanges.
//!
//! Unions carry the TL constructor name in `"_"`; single-constructor objects
//! omit it. Field names follow the schema exactly. Objects the core passes
//! through without translating (updates, document attributes) stay as raw
//! JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec::{hex_bytes, long};

// =============================================================================
// PEERS AND USERS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum InputPeer {
    #[serde(rename = "inputPeerEmpty")]
    Empty,
    #[serde(rename = "inputPeerSelf")]
    Myself,
    #[serde(rename = "inputPeerUser")]
    User {
        #[serde(with = "long")]
        user_id: i64,
        #[serde(with = "long")]
        access_hash: i64,
    },
    #[serde(rename = "inputPeerChat")]
    Chat {
        #[serde(with = "long")]
        chat_id: i64,
    },
    #[serde(rename = "inputPeerChannel")]
    Channel {
        #[serde(with = "long")]
        channel_id: i64,
        #[serde(with = "long")]
        access_hash: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum InputUser {
    #[serde(rename = "inputUserEmpty")]
    Empty,
    #[serde(rename = "inputUserSelf")]
    Myself,
    #[serde(rename = "inputUser")]
    User {
        #[serde(with = "long")]
        user_id: i64,
        #[serde(with = "long")]
        access_hash: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum Peer {
    #[serde(rename = "peerUser")]
    User {
        #[serde(with = "long")]
        user_id: i64,
    },
    #[serde(rename = "peerChat")]
    Chat {
        #[serde(with = "long")]
        chat_id: i64,
    },
    #[serde(rename = "peerChannel")]
    Channel {
        #[serde(with = "long")]
        channel_id: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum User {
    #[serde(rename = "userEmpty")]
    Empty {
        #[serde(with = "long")]
        id: i64,
    },
    #[serde(rename = "user")]
    User(UserData),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    #[serde(with = "long")]
    pub id: i64,
    #[serde(default, with = "long::option")]
    pub access_hash: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, rename = "self")]
    pub is_self: bool,
    #[serde(default)]
    pub contact: bool,
    #[serde(default)]
    pub mutual_contact: bool,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub close_friend: bool,
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum Document {
    #[serde(rename = "documentEmpty")]
    Empty {
        #[serde(with = "long")]
        id: i64,
    },
    #[serde(rename = "document")]
    Document(DocumentData),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentData {
    #[serde(with = "long")]
    pub id: i64,
    #[serde(with = "long")]
    pub access_hash: i64,
    pub mime_type: String,
    #[serde(with = "long")]
    pub size: i64,
    #[serde(default)]
    pub dc_id: i32,
    #[serde(default)]
    pub attributes: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum WebDocument {
    #[serde(rename = "webDocument")]
    Proxied {
        url: String,
        #[serde(with = "long")]
        access_hash: i64,
        size: i32,
        mime_type: String,
        #[serde(default)]
        attributes: Vec<Value>,
    },
    #[serde(rename = "webDocumentNoProxy")]
    NoProxy {
        url: String,
        size: i32,
        mime_type: String,
        #[serde(default)]
        attributes: Vec<Value>,
    },
}

impl WebDocument {
    pub fn url(&self) -> &str {
        match self {
            WebDocument::Proxied { url, .. } | WebDocument::NoProxy { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataJson {
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextWithEntities {
    pub text: String,
    #[serde(default)]
    pub entities: Vec<Value>,
}

// =============================================================================
// INVOICES AND PAYMENT FORMS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    #[serde(with = "long")]
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub test: bool,
    #[serde(default)]
    pub name_requested: bool,
    #[serde(default)]
    pub phone_requested: bool,
    #[serde(default)]
    pub email_requested: bool,
    #[serde(default)]
    pub shipping_address_requested: bool,
    #[serde(default)]
    pub flexible: bool,
    #[serde(default)]
    pub phone_to_provider: bool,
    #[serde(default)]
    pub email_to_provider: bool,
    #[serde(default)]
    pub recurring: bool,
    pub currency: String,
    #[serde(default)]
    pub prices: Vec<LabeledPrice>,
    #[serde(default, with = "long::option", skip_serializing_if = "Option::is_none")]
    pub max_tip_amount: Option<i64>,
    #[serde(default, with = "long::vec")]
    pub suggested_tip_amounts: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_period: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAddress {
    pub street_line1: String,
    #[serde(default)]
    pub street_line2: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub country_iso2: String,
    pub post_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequestedInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<PostAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub prices: Vec<LabeledPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSavedCredentials {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedRequestedInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub shipping_options: Vec<ShippingOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum PaymentForm {
    #[serde(rename = "payments.paymentForm")]
    Regular(RegularPaymentForm),
    #[serde(rename = "payments.paymentFormStars")]
    Stars(StarsPaymentForm),
    #[serde(rename = "payments.paymentFormStarGift")]
    StarGift {
        #[serde(with = "long")]
        form_id: i64,
        invoice: Invoice,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularPaymentForm {
    #[serde(with = "long")]
    pub form_id: i64,
    #[serde(with = "long")]
    pub bot_id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo: Option<WebDocument>,
    pub invoice: Invoice,
    #[serde(with = "long")]
    pub provider_id: i64,
    pub url: String,
    #[serde(default)]
    pub native_provider: Option<String>,
    #[serde(default)]
    pub native_params: Option<DataJson>,
    #[serde(default)]
    pub saved_info: Option<PaymentRequestedInfo>,
    #[serde(default)]
    pub saved_credentials: Vec<PaymentSavedCredentials>,
    #[serde(default)]
    pub can_save_credentials: bool,
    #[serde(default)]
    pub password_missing: bool,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsPaymentForm {
    #[serde(with = "long")]
    pub form_id: i64,
    #[serde(with = "long")]
    pub bot_id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo: Option<WebDocument>,
    pub invoice: Invoice,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum InputPaymentCredentials {
    #[serde(rename = "inputPaymentCredentialsSaved")]
    Saved {
        id: String,
        #[serde(with = "hex_bytes")]
        tmp_password: Vec<u8>,
    },
    #[serde(rename = "inputPaymentCredentials")]
    New {
        #[serde(default)]
        save: bool,
        data: DataJson,
    },
    #[serde(rename = "inputPaymentCredentialsApplePay")]
    ApplePay { payment_data: DataJson },
    #[serde(rename = "inputPaymentCredentialsGooglePay")]
    GooglePay { payment_token: DataJson },
}

/// Reply to `payments.sendPaymentForm` and `payments.sendStarsForm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum PaymentResult {
    #[serde(rename = "payments.paymentResult")]
    Done {
        #[serde(default)]
        updates: Value,
    },
    #[serde(rename = "payments.paymentVerificationNeeded")]
    VerificationNeeded { url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum PaymentReceipt {
    #[serde(rename = "payments.paymentReceipt")]
    Regular(RegularPaymentReceipt),
    #[serde(rename = "payments.paymentReceiptStars")]
    Stars(StarsPaymentReceipt),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularPaymentReceipt {
    pub date: i32,
    #[serde(with = "long")]
    pub bot_id: i64,
    #[serde(with = "long")]
    pub provider_id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo: Option<WebDocument>,
    pub invoice: Invoice,
    #[serde(default)]
    pub info: Option<PaymentRequestedInfo>,
    #[serde(default)]
    pub shipping: Option<ShippingOption>,
    #[serde(default, with = "long::option")]
    pub tip_amount: Option<i64>,
    pub currency: String,
    #[serde(with = "long")]
    pub total_amount: i64,
    pub credentials_title: String,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsPaymentReceipt {
    pub date: i32,
    #[serde(with = "long")]
    pub bot_id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo: Option<WebDocument>,
    pub invoice: Invoice,
    pub currency: String,
    #[serde(with = "long")]
    pub total_amount: i64,
    pub transaction_id: String,
    #[serde(default)]
    pub users: Vec<User>,
}

// =============================================================================
// STORE PURPOSES AND INPUT INVOICES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumGiftCodeOption {
    pub users: i32,
    pub months: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_quantity: Option<i32>,
    pub currency: String,
    #[serde(with = "long")]
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum InputStorePaymentPurpose {
    #[serde(rename = "inputStorePaymentPremiumGiftCode")]
    PremiumGiftCode {
        users: Vec<InputUser>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        boost_peer: Option<InputPeer>,
        currency: String,
        #[serde(with = "long")]
        amount: i64,
    },
    #[serde(rename = "inputStorePaymentPremiumGiveaway")]
    PremiumGiveaway {
        #[serde(default)]
        only_new_subscribers: bool,
        #[serde(default)]
        winners_are_visible: bool,
        boost_peer: InputPeer,
        #[serde(default)]
        additional_peers: Vec<InputPeer>,
        #[serde(default)]
        countries_iso2: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prize_description: Option<String>,
        #[serde(with = "long")]
        random_id: i64,
        until_date: i32,
        currency: String,
        #[serde(with = "long")]
        amount: i64,
    },
    #[serde(rename = "inputStorePaymentStarsTopup")]
    StarsTopup {
        #[serde(with = "long")]
        stars: i64,
        currency: String,
        #[serde(with = "long")]
        amount: i64,
    },
    #[serde(rename = "inputStorePaymentStarsGift")]
    StarsGift {
        user_id: InputUser,
        #[serde(with = "long")]
        stars: i64,
        currency: String,
        #[serde(with = "long")]
        amount: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum InputInvoice {
    #[serde(rename = "inputInvoiceMessage")]
    Message { peer: InputPeer, msg_id: i32 },
    #[serde(rename = "inputInvoiceSlug")]
    Slug { slug: String },
    #[serde(rename = "inputInvoicePremiumGiftCode")]
    PremiumGiftCode {
        purpose: InputStorePaymentPurpose,
        option: PremiumGiftCodeOption,
    },
    #[serde(rename = "inputInvoiceStars")]
    Stars { purpose: InputStorePaymentPurpose },
    #[serde(rename = "inputInvoiceStarGift")]
    StarGift {
        #[serde(default)]
        hide_name: bool,
        #[serde(default)]
        include_upgrade: bool,
        peer: InputPeer,
        #[serde(with = "long")]
        gift_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<TextWithEntities>,
    },
}

// =============================================================================
// STARS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarsAmount {
    #[serde(with = "long")]
    pub amount: i64,
    #[serde(default)]
    pub nanos: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum StarsTransactionPeer {
    #[serde(rename = "starsTransactionPeerUnsupported")]
    Unsupported,
    #[serde(rename = "starsTransactionPeerAppStore")]
    AppStore,
    #[serde(rename = "starsTransactionPeerPlayMarket")]
    PlayMarket,
    #[serde(rename = "starsTransactionPeerPremiumBot")]
    PremiumBot,
    #[serde(rename = "starsTransactionPeerFragment")]
    Fragment,
    #[serde(rename = "starsTransactionPeerAds")]
    Ads,
    #[serde(rename = "starsTransactionPeerAPI")]
    Api,
    #[serde(rename = "starsTransactionPeer")]
    Peer { peer: Peer },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsTransaction {
    pub id: String,
    pub stars: StarsAmount,
    pub date: i32,
    pub peer: StarsTransactionPeer,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo: Option<WebDocument>,
    #[serde(default)]
    pub refund: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub gift: bool,
    #[serde(default)]
    pub reaction: bool,
    #[serde(default)]
    pub msg_id: Option<i32>,
    #[serde(default)]
    pub subscription_period: Option<i32>,
    #[serde(default)]
    pub giveaway_post_id: Option<i32>,
    #[serde(default)]
    pub transaction_date: Option<i32>,
    #[serde(default)]
    pub transaction_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsStatus {
    pub balance: StarsAmount,
    #[serde(default)]
    pub history: Option<Vec<StarsTransaction>>,
    #[serde(default)]
    pub next_offset: Option<String>,
    #[serde(default)]
    pub subscriptions_next_offset: Option<String>,
    #[serde(default)]
    pub chats: Vec<Value>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Shared by `payments.getStarsTopupOptions` and `payments.getStarsGiftOptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsTopupOption {
    #[serde(default)]
    pub extended: bool,
    #[serde(with = "long")]
    pub stars: i64,
    #[serde(default)]
    pub store_product: Option<String>,
    pub currency: String,
    #[serde(with = "long")]
    pub amount: i64,
}

// =============================================================================
// GIFT CODES, GIVEAWAYS, STAR GIFTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedGiftCode {
    #[serde(default)]
    pub via_giveaway: bool,
    #[serde(default)]
    pub from_id: Option<Peer>,
    #[serde(default)]
    pub giveaway_msg_id: Option<i32>,
    #[serde(default, with = "long::option")]
    pub to_id: Option<i64>,
    pub date: i32,
    pub months: i32,
    #[serde(default)]
    pub used_date: Option<i32>,
    #[serde(default)]
    pub chats: Vec<Value>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum GiveawayInfo {
    #[serde(rename = "payments.giveawayInfo")]
    Ongoing {
        #[serde(default)]
        participating: bool,
        #[serde(default)]
        preparing_results: bool,
        start_date: i32,
        #[serde(default)]
        joined_too_early_date: Option<i32>,
        #[serde(default, with = "long::option")]
        admin_disallowed_chat_id: Option<i64>,
        #[serde(default)]
        disallowed_country: Option<String>,
    },
    #[serde(rename = "payments.giveawayInfoResults")]
    Results {
        #[serde(default)]
        winner: bool,
        #[serde(default)]
        refunded: bool,
        start_date: i32,
        #[serde(default)]
        gift_code_slug: Option<String>,
        #[serde(default, with = "long::option")]
        stars_prize: Option<i64>,
        finish_date: i32,
        winners_count: i32,
        #[serde(default)]
        activated_count: Option<i32>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarGift {
    #[serde(with = "long")]
    pub id: i64,
    #[serde(default)]
    pub limited: bool,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub birthday: bool,
    pub sticker: Document,
    #[serde(with = "long")]
    pub stars: i64,
    #[serde(default)]
    pub availability_remains: Option<i32>,
    #[serde(default)]
    pub availability_total: Option<i32>,
    #[serde(with = "long")]
    pub convert_stars: i64,
    #[serde(default)]
    pub first_sale_date: Option<i32>,
    #[serde(default)]
    pub last_sale_date: Option<i32>,
    #[serde(default, with = "long::option")]
    pub upgrade_stars: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum StarGifts {
    #[serde(rename = "payments.starGiftsNotModified")]
    NotModified,
    #[serde(rename = "payments.starGifts")]
    Gifts { hash: i32, gifts: Vec<StarGift> },
}

// =============================================================================
// BOOSTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsPercentValue {
    pub part: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum PrepaidGiveaway {
    #[serde(rename = "prepaidGiveaway")]
    Premium {
        #[serde(with = "long")]
        id: i64,
        months: i32,
        quantity: i32,
        date: i32,
    },
    #[serde(rename = "prepaidStarsGiveaway")]
    Stars {
        #[serde(with = "long")]
        id: i64,
        #[serde(with = "long")]
        stars: i64,
        quantity: i32,
        boosts: i32,
        date: i32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostsStatus {
    #[serde(default)]
    pub my_boost: bool,
    pub level: i32,
    pub current_level_boosts: i32,
    pub boosts: i32,
    #[serde(default)]
    pub gift_boosts: Option<i32>,
    #[serde(default)]
    pub next_level_boosts: Option<i32>,
    #[serde(default)]
    pub premium_audience: Option<StatsPercentValue>,
    pub boost_url: String,
    #[serde(default)]
    pub prepaid_giveaways: Vec<PrepaidGiveaway>,
    #[serde(default)]
    pub my_boost_slots: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boost {
    pub id: String,
    #[serde(default, with = "long::option")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub giveaway_msg_id: Option<i32>,
    pub date: i32,
    pub expires: i32,
    #[serde(default)]
    pub used_gift_slug: Option<String>,
    #[serde(default)]
    pub multiplier: Option<i32>,
    #[serde(default, with = "long::option")]
    pub stars: Option<i64>,
    #[serde(default)]
    pub gift: bool,
    #[serde(default)]
    pub giveaway: bool,
    #[serde(default)]
    pub unclaimed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostsList {
    pub count: i32,
    #[serde(default)]
    pub boosts: Vec<Boost>,
    #[serde(default)]
    pub next_offset: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyBoost {
    pub slot: i32,
    #[serde(default)]
    pub peer: Option<Peer>,
    pub date: i32,
    pub expires: i32,
    #[serde(default)]
    pub cooldown_until_date: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyBoosts {
    #[serde(default)]
    pub my_boosts: Vec<MyBoost>,
    #[serde(default)]
    pub chats: Vec<Value>,
    #[serde(default)]
    pub users: Vec<User>,
}

// =============================================================================
// CONTACTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(with = "long")]
    pub user_id: i64,
    #[serde(default)]
    pub mutual: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum Contacts {
    #[serde(rename = "contacts.contactsNotModified")]
    NotModified,
    #[serde(rename = "contacts.contacts")]
    Contacts {
        #[serde(default)]
        contacts: Vec<Contact>,
        #[serde(default)]
        saved_count: i32,
        #[serde(default)]
        users: Vec<User>,
    },
}
