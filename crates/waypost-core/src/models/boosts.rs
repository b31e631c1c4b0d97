use serde::Serialize;

use super::peer::PeerId;
use super::user::User;
use crate::rpc::tl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PrepaidGiveaway {
    Premium {
        id: i64,
        months: i32,
        quantity: i32,
        date: i32,
    },
    Stars {
        id: i64,
        stars: i64,
        quantity: i32,
        boosts: i32,
        date: i32,
    },
}

impl PrepaidGiveaway {
    pub fn from_wire(giveaway: &tl::PrepaidGiveaway) -> Self {
        match *giveaway {
            tl::PrepaidGiveaway::Premium {
                id,
                months,
                quantity,
                date,
            } => Self::Premium {
                id,
                months,
                quantity,
                date,
            },
            tl::PrepaidGiveaway::Stars {
                id,
                stars,
                quantity,
                boosts,
                date,
            } => Self::Stars {
                id,
                stars,
                quantity,
                boosts,
                date,
            },
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            Self::Premium { id, .. } | Self::Stars { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostsStatus {
    pub level: i32,
    pub boost_count: i32,
    pub gift_boost_count: i32,
    pub current_level_boost_count: i32,
    /// `None` once the top level is reached
    pub next_level_boost_count: Option<i32>,
    /// Share of subscribers with Premium, in percent
    pub premium_member_percentage: f64,
    pub premium_member_count: i32,
    pub boost_url: String,
    pub is_boosted_by_me: bool,
    pub my_boost_slots: Vec<i32>,
    pub prepaid_giveaways: Vec<PrepaidGiveaway>,
}

impl BoostsStatus {
    pub fn from_wire(status: &tl::BoostsStatus) -> Self {
        let (premium_member_count, premium_member_percentage) = match &status.premium_audience {
            Some(audience) if audience.total > 0.0 => (
                audience.part as i32,
                audience.part * 100.0 / audience.total,
            ),
            Some(audience) => (audience.part as i32, 0.0),
            None => (0, 0.0),
        };
        Self {
            level: status.level,
            boost_count: status.boosts,
            gift_boost_count: status.gift_boosts.unwrap_or(0),
            current_level_boost_count: status.current_level_boosts,
            next_level_boost_count: status.next_level_boosts,
            premium_member_percentage,
            premium_member_count,
            boost_url: status.boost_url.clone(),
            is_boosted_by_me: status.my_boost,
            my_boost_slots: status.my_boost_slots.clone(),
            prepaid_giveaways: status
                .prepaid_giveaways
                .iter()
                .map(PrepaidGiveaway::from_wire)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boost {
    pub id: String,
    pub user_id: Option<i64>,
    pub giveaway_msg_id: Option<i32>,
    pub date: i32,
    pub expires: i32,
    pub used_gift_slug: Option<String>,
    /// A single boost can count several times
    pub multiplier: i32,
    pub stars: Option<i64>,
    pub is_gift: bool,
    pub is_giveaway: bool,
    pub is_unclaimed: bool,
}

impl Boost {
    pub fn from_wire(boost: &tl::Boost) -> Self {
        Self {
            id: boost.id.clone(),
            user_id: boost.user_id,
            giveaway_msg_id: boost.giveaway_msg_id,
            date: boost.date,
            expires: boost.expires,
            used_gift_slug: boost.used_gift_slug.clone(),
            multiplier: boost.multiplier.unwrap_or(1),
            stars: boost.stars,
            is_gift: boost.gift,
            is_giveaway: boost.giveaway,
            is_unclaimed: boost.unclaimed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoostsList {
    pub total_count: i32,
    pub boosts: Vec<Boost>,
    pub next_offset: Option<String>,
    pub users: Vec<User>,
}

impl BoostsList {
    pub fn from_wire(list: &tl::BoostsList) -> Self {
        Self {
            total_count: list.count,
            boosts: list.boosts.iter().map(Boost::from_wire).collect(),
            next_offset: list.next_offset.clone(),
            users: User::list_from_wire(&list.users),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MyBoost {
    pub slot: i32,
    /// Unset while the slot is free
    pub peer: Option<PeerId>,
    pub date: i32,
    pub expires: i32,
    pub cooldown_until_date: Option<i32>,
}

impl MyBoost {
    pub fn from_wire(boost: &tl::MyBoost) -> Self {
        Self {
            slot: boost.slot,
            peer: boost.peer.as_ref().map(PeerId::from_wire),
            date: boost.date,
            expires: boost.expires,
            cooldown_until_date: boost.cooldown_until_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyBoosts {
    pub boosts: Vec<MyBoost>,
    pub users: Vec<User>,
}

impl MyBoosts {
    pub fn from_wire(boosts: &tl::MyBoosts) -> Self {
        Self {
            boosts: boosts.my_boosts.iter().map(MyBoost::from_wire).collect(),
            users: User::list_from_wire(&boosts.users),
        }
    }

    pub fn free_slots(&self) -> impl Iterator<Item = i32> + '_ {
        self.boosts
            .iter()
            .filter(|b| b.peer.is_none())
            .map(|b| b.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosts_status_audience_percentage() {
        let wire: tl::BoostsStatus = serde_json::from_value(serde_json::json!({
            "level": 2,
            "current_level_boosts": 10,
            "boosts": 14,
            "next_level_boosts": 20,
            "premium_audience": { "part": 25.0, "total": 100.0 },
            "boost_url": "https://t.me/boost/chan",
            "prepaid_giveaways": [
                { "_": "prepaidStarsGiveaway", "id": "7", "stars": "5000", "quantity": 3, "boosts": 50, "date": 1 }
            ],
        }))
        .unwrap();

        let status = BoostsStatus::from_wire(&wire);
        assert_eq!(status.premium_member_count, 25);
        assert!((status.premium_member_percentage - 25.0).abs() < f64::EPSILON);
        assert_eq!(status.gift_boost_count, 0);
        assert!(!status.is_boosted_by_me);
        assert_eq!(status.prepaid_giveaways.len(), 1);
        assert_eq!(status.prepaid_giveaways[0].id(), 7);
    }

    #[test]
    fn test_boost_multiplier_defaults_to_one() {
        let wire: tl::Boost = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "user_id": 99,
            "date": 10,
            "expires": 20,
        }))
        .unwrap();

        let boost = Boost::from_wire(&wire);
        assert_eq!(boost.multiplier, 1);
        assert_eq!(boost.user_id, Some(99));
    }

    #[test]
    fn test_free_slots() {
        let wire: tl::MyBoosts = serde_json::from_value(serde_json::json!({
            "my_boosts": [
                { "slot": 1, "peer": { "_": "peerChannel", "channel_id": "5" }, "date": 1, "expires": 2 },
                { "slot": 2, "date": 1, "expires": 2 },
            ],
        }))
        .unwrap();

        let boosts = MyBoosts::from_wire(&wire);
        assert_eq!(boosts.free_slots().collect::<Vec<_>>(), vec![2]);
    }
}
