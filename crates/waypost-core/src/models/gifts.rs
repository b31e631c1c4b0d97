use serde::Serialize;

use super::peer::PeerId;
use super::user::User;
use crate::rpc::tl;

/// Price of a Premium gift code bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumGiftCodeOption {
    pub users: i32,
    pub months: i32,
    pub store_product: Option<String>,
    pub store_quantity: Option<i32>,
    pub currency: String,
    pub amount: i64,
}

impl PremiumGiftCodeOption {
    pub fn from_wire(option: &tl::PremiumGiftCodeOption) -> Self {
        Self {
            users: option.users,
            months: option.months,
            store_product: option.store_product.clone(),
            store_quantity: option.store_quantity,
            currency: option.currency.clone(),
            amount: option.amount,
        }
    }

    pub fn to_wire(&self) -> tl::PremiumGiftCodeOption {
        tl::PremiumGiftCodeOption {
            users: self.users,
            months: self.months,
            store_product: self.store_product.clone(),
            store_quantity: self.store_quantity,
            currency: self.currency.clone(),
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftCodeInfo {
    pub is_via_giveaway: bool,
    pub creator: Option<PeerId>,
    pub giveaway_msg_id: Option<i32>,
    pub recipient_user_id: Option<i64>,
    pub date: i32,
    pub months: i32,
    /// Unset while the code is still unused
    pub used_date: Option<i32>,
    pub users: Vec<User>,
}

impl GiftCodeInfo {
    pub fn from_wire(code: &tl::CheckedGiftCode) -> Self {
        Self {
            is_via_giveaway: code.via_giveaway,
            creator: code.from_id.as_ref().map(PeerId::from_wire),
            giveaway_msg_id: code.giveaway_msg_id,
            recipient_user_id: code.to_id,
            date: code.date,
            months: code.months,
            used_date: code.used_date,
            users: User::list_from_wire(&code.users),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GiveawayInfo {
    Ongoing {
        is_participating: bool,
        is_preparing_results: bool,
        start_date: i32,
        joined_too_early_date: Option<i32>,
        admin_disallowed_chat_id: Option<i64>,
        disallowed_country: Option<String>,
    },
    Completed {
        is_winner: bool,
        is_refunded: bool,
        start_date: i32,
        finish_date: i32,
        gift_code_slug: Option<String>,
        stars_prize: Option<i64>,
        winners_count: i32,
        activated_count: Option<i32>,
    },
}

impl GiveawayInfo {
    pub fn from_wire(info: &tl::GiveawayInfo) -> Self {
        match info {
            tl::GiveawayInfo::Ongoing {
                participating,
                preparing_results,
                start_date,
                joined_too_early_date,
                admin_disallowed_chat_id,
                disallowed_country,
            } => GiveawayInfo::Ongoing {
                is_participating: *participating,
                is_preparing_results: *preparing_results,
                start_date: *start_date,
                joined_too_early_date: *joined_too_early_date,
                admin_disallowed_chat_id: *admin_disallowed_chat_id,
                disallowed_country: disallowed_country.clone(),
            },
            tl::GiveawayInfo::Results {
                winner,
                refunded,
                start_date,
                gift_code_slug,
                stars_prize,
                finish_date,
                winners_count,
                activated_count,
            } => GiveawayInfo::Completed {
                is_winner: *winner,
                is_refunded: *refunded,
                start_date: *start_date,
                finish_date: *finish_date,
                gift_code_slug: gift_code_slug.clone(),
                stars_prize: *stars_prize,
                winners_count: *winners_count,
                activated_count: *activated_count,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarGift {
    pub id: i64,
    /// Id of the sticker document, registered in the media cache
    pub sticker_id: i64,
    pub stars: i64,
    pub convert_stars: i64,
    pub upgrade_stars: Option<i64>,
    pub is_limited: bool,
    pub is_sold_out: bool,
    pub is_birthday: bool,
    pub availability_remains: Option<i32>,
    pub availability_total: Option<i32>,
    pub first_sale_date: Option<i32>,
    pub last_sale_date: Option<i32>,
}

impl StarGift {
    pub fn from_wire(gift: &tl::StarGift) -> Self {
        let sticker_id = match &gift.sticker {
            tl::Document::Empty { id } => *id,
            tl::Document::Document(data) => data.id,
        };
        Self {
            id: gift.id,
            sticker_id,
            stars: gift.stars,
            convert_stars: gift.convert_stars,
            upgrade_stars: gift.upgrade_stars,
            is_limited: gift.limited,
            is_sold_out: gift.sold_out,
            is_birthday: gift.birthday,
            availability_remains: gift.availability_remains,
            availability_total: gift.availability_total,
            first_sale_date: gift.first_sale_date,
            last_sale_date: gift.last_sale_date,
        }
    }
}
