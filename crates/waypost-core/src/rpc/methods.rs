//! Request objects, one per TL method the core issues.

use serde::Serialize;
use serde_json::Value;

use super::codec::long;
use super::tl::{
    BoostsList, BoostsStatus, CheckedGiftCode, Contacts, DataJson, GiveawayInfo, InputInvoice,
    InputPaymentCredentials, InputPeer, InputStorePaymentPurpose, InputUser, MyBoosts,
    PaymentForm, PaymentReceipt, PaymentRequestedInfo, PaymentResult, PremiumGiftCodeOption,
    StarGifts, StarsStatus, StarsTopupOption, ValidatedRequestedInfo,
};
use super::RpcMethod;

macro_rules! rpc_method {
    ($request:ty => $name:literal, $response:ty) => {
        impl RpcMethod for $request {
            const NAME: &'static str = $name;
            type Response = $response;
        }
    };
}

// ===== payments.* =====

#[derive(Debug, Clone, Serialize)]
pub struct ValidateRequestedInfo {
    pub save: bool,
    pub invoice: InputInvoice,
    pub info: PaymentRequestedInfo,
}
rpc_method!(ValidateRequestedInfo => "payments.validateRequestedInfo", ValidatedRequestedInfo);

#[derive(Debug, Clone, Serialize)]
pub struct GetPaymentForm {
    pub invoice: InputInvoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_params: Option<DataJson>,
}
rpc_method!(GetPaymentForm => "payments.getPaymentForm", PaymentForm);

#[derive(Debug, Clone, Serialize)]
pub struct SendPaymentForm {
    #[serde(with = "long")]
    pub form_id: i64,
    pub invoice: InputInvoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_info_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option_id: Option<String>,
    pub credentials: InputPaymentCredentials,
    #[serde(with = "long::option", skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<i64>,
}
rpc_method!(SendPaymentForm => "payments.sendPaymentForm", PaymentResult);

#[derive(Debug, Clone, Serialize)]
pub struct SendStarsForm {
    #[serde(with = "long")]
    pub form_id: i64,
    pub invoice: InputInvoice,
}
rpc_method!(SendStarsForm => "payments.sendStarsForm", PaymentResult);

#[derive(Debug, Clone, Serialize)]
pub struct GetPaymentReceipt {
    pub peer: InputPeer,
    pub msg_id: i32,
}
rpc_method!(GetPaymentReceipt => "payments.getPaymentReceipt", PaymentReceipt);

#[derive(Debug, Clone, Serialize)]
pub struct GetStarsStatus {
    pub peer: InputPeer,
}
rpc_method!(GetStarsStatus => "payments.getStarsStatus", StarsStatus);

#[derive(Debug, Clone, Serialize)]
pub struct GetStarsTransactions {
    pub inbound: bool,
    pub outbound: bool,
    pub ascending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    pub peer: InputPeer,
    pub offset: String,
    pub limit: i32,
}
rpc_method!(GetStarsTransactions => "payments.getStarsTransactions", StarsStatus);

#[derive(Debug, Clone, Serialize)]
pub struct GetStarsTopupOptions {}
rpc_method!(GetStarsTopupOptions => "payments.getStarsTopupOptions", Vec<StarsTopupOption>);

#[derive(Debug, Clone, Serialize)]
pub struct GetStarsGiftOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<InputUser>,
}
rpc_method!(GetStarsGiftOptions => "payments.getStarsGiftOptions", Vec<StarsTopupOption>);

#[derive(Debug, Clone, Serialize)]
pub struct GetPremiumGiftCodeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_peer: Option<InputPeer>,
}
rpc_method!(GetPremiumGiftCodeOptions => "payments.getPremiumGiftCodeOptions", Vec<PremiumGiftCodeOption>);

#[derive(Debug, Clone, Serialize)]
pub struct CheckGiftCode {
    pub slug: String,
}
rpc_method!(CheckGiftCode => "payments.checkGiftCode", CheckedGiftCode);

#[derive(Debug, Clone, Serialize)]
pub struct ApplyGiftCode {
    pub slug: String,
}
rpc_method!(ApplyGiftCode => "payments.applyGiftCode", Value);

#[derive(Debug, Clone, Serialize)]
pub struct GetGiveawayInfo {
    pub peer: InputPeer,
    pub msg_id: i32,
}
rpc_method!(GetGiveawayInfo => "payments.getGiveawayInfo", GiveawayInfo);

#[derive(Debug, Clone, Serialize)]
pub struct LaunchPrepaidGiveaway {
    pub peer: InputPeer,
    #[serde(with = "long")]
    pub giveaway_id: i64,
    pub purpose: InputStorePaymentPurpose,
}
rpc_method!(LaunchPrepaidGiveaway => "payments.launchPrepaidGiveaway", Value);

#[derive(Debug, Clone, Serialize)]
pub struct GetStarGifts {
    pub hash: i32,
}
rpc_method!(GetStarGifts => "payments.getStarGifts", StarGifts);

// ===== premium.* =====

#[derive(Debug, Clone, Serialize)]
pub struct GetBoostsStatus {
    pub peer: InputPeer,
}
rpc_method!(GetBoostsStatus => "premium.getBoostsStatus", BoostsStatus);

#[derive(Debug, Clone, Serialize)]
pub struct GetBoostsList {
    pub gifts: bool,
    pub peer: InputPeer,
    pub offset: String,
    pub limit: i32,
}
rpc_method!(GetBoostsList => "premium.getBoostsList", BoostsList);

#[derive(Debug, Clone, Serialize)]
pub struct GetMyBoosts {}
rpc_method!(GetMyBoosts => "premium.getMyBoosts", MyBoosts);

#[derive(Debug, Clone, Serialize)]
pub struct ApplyBoost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<i32>>,
    pub peer: InputPeer,
}
rpc_method!(ApplyBoost => "premium.applyBoost", MyBoosts);

#[derive(Debug, Clone, Serialize)]
pub struct GetUserBoosts {
    pub peer: InputPeer,
    pub user_id: InputUser,
}
rpc_method!(GetUserBoosts => "premium.getUserBoosts", BoostsList);

// ===== contacts.* =====

#[derive(Debug, Clone, Serialize)]
pub struct GetContacts {
    #[serde(with = "long")]
    pub hash: i64,
}
rpc_method!(GetContacts => "contacts.getContacts", Contacts);

#[derive(Debug, Clone, Serialize)]
pub struct EditCloseFriends {
    #[serde(with = "long::vec")]
    pub id: Vec<i64>,
}
rpc_method!(EditCloseFriends => "contacts.editCloseFriends", bool);
