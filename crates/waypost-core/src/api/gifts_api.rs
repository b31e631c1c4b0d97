use super::*;
use crate::models::{GiftCodeInfo, GiveawayInfo, GiveawayPurpose, PeerRef, PremiumGiftCodeOption, StarGift};
use crate::rpc::methods::{
    ApplyGiftCode, CheckGiftCode, GetGiveawayInfo, GetPremiumGiftCodeOptions, GetStarGifts,
    LaunchPrepaidGiveaway,
};
use crate::rpc::tl;

impl<T: Transport> CoreApi<T> {
    /// Premium gift code bundles, optionally priced for boosting `boost_channel`.
    pub async fn get_premium_gift_code_options(
        &self,
        boost_channel: Option<PeerRef>,
    ) -> Result<Option<Vec<PremiumGiftCodeOption>>, RpcError> {
        let request = GetPremiumGiftCodeOptions {
            boost_peer: boost_channel.as_ref().map(PeerRef::input_peer),
        };
        let options = self.invoke(&request).await?;
        Ok(options.map(|options| options.iter().map(PremiumGiftCodeOption::from_wire).collect()))
    }

    pub async fn check_gift_code(&self, slug: &str) -> Result<Option<GiftCodeInfo>, RpcError> {
        let request = CheckGiftCode {
            slug: slug.to_string(),
        };
        let code = self.invoke(&request).await?;
        Ok(code.map(|code| GiftCodeInfo::from_wire(&code)))
    }

    /// The reply is an updates container; only its presence matters.
    pub async fn apply_gift_code(&self, slug: &str) -> Result<Option<bool>, RpcError> {
        let request = ApplyGiftCode {
            slug: slug.to_string(),
        };
        Ok(self.invoke(&request).await?.map(|_| true))
    }

    pub async fn get_giveaway_info(
        &self,
        peer: PeerRef,
        msg_id: i32,
    ) -> Result<Option<GiveawayInfo>, RpcError> {
        let request = GetGiveawayInfo {
            peer: peer.input_peer(),
            msg_id,
        };
        let info = self.invoke(&request).await?;
        Ok(info.map(|info| GiveawayInfo::from_wire(&info)))
    }

    pub async fn launch_prepaid_giveaway(
        &self,
        peer: PeerRef,
        giveaway_id: i64,
        purpose: &GiveawayPurpose,
    ) -> Result<Option<bool>, RpcError> {
        let request = LaunchPrepaidGiveaway {
            peer: peer.input_peer(),
            giveaway_id,
            purpose: purpose.to_wire(),
        };
        Ok(self.invoke(&request).await?.map(|_| true))
    }

    /// Catalogue of gifts purchasable with stars. Sticker documents are registered
    /// in the media cache.
    pub async fn get_star_gifts(&self) -> Result<Option<Vec<StarGift>>, RpcError> {
        match self.invoke(&GetStarGifts { hash: 0 }).await? {
            None | Some(tl::StarGifts::NotModified) => Ok(None),
            Some(tl::StarGifts::Gifts { gifts, .. }) => Ok(Some(
                gifts
                    .iter()
                    .map(|gift| {
                        self.media.register_document(&gift.sticker);
                        StarGift::from_wire(gift)
                    })
                    .collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::test_support::{Harness, MockTransport};
    use super::*;
    use crate::store::MediaCache;

    #[tokio::test]
    async fn test_get_star_gifts_registers_stickers() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.getStarGifts",
            json!({
                "_": "payments.starGifts",
                "hash": 991,
                "gifts": [
                    {
                        "id": "5001",
                        "limited": true,
                        "sticker": {
                            "_": "document",
                            "id": "8001",
                            "access_hash": "-3",
                            "mime_type": "application/x-tgsticker",
                            "size": 4096
                        },
                        "stars": "250",
                        "availability_remains": 12,
                        "availability_total": 1000,
                        "convert_stars": "200"
                    },
                    {
                        "id": "5002",
                        "sticker": { "_": "documentEmpty", "id": "8002" },
                        "stars": 15,
                        "convert_stars": 10,
                        "upgrade_stars": "25"
                    }
                ]
            }),
        ));

        let gifts = harness.api.get_star_gifts().await.unwrap().unwrap();
        assert_eq!(gifts.len(), 2);
        assert_eq!(gifts[0].id, 5001);
        assert_eq!(gifts[0].sticker_id, 8001);
        assert!(gifts[0].is_limited);
        assert_eq!(gifts[0].availability_remains, Some(12));
        assert_eq!(gifts[1].upgrade_stars, Some(25));

        let media = harness.api.media();
        assert_eq!(media.len(), 1);
        assert!(media.contains(&MediaCache::document_key(8001)));
        assert_eq!(harness.single_call("payments.getStarGifts")["hash"], 0);
    }

    #[tokio::test]
    async fn test_star_gifts_not_modified_is_absent() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.getStarGifts",
            json!({ "_": "payments.starGiftsNotModified" }),
        ));

        assert!(harness.api.get_star_gifts().await.unwrap().is_none());
        assert!(harness.api.media().is_empty());
    }

    #[tokio::test]
    async fn test_check_gift_code() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.checkGiftCode",
            json!({
                "via_giveaway": true,
                "from_id": { "_": "peerChannel", "channel_id": "1234" },
                "giveaway_msg_id": 55,
                "date": 1700000000,
                "months": 3,
                "users": []
            }),
        ));

        let info = harness
            .api
            .check_gift_code("GIFTSLUG")
            .await
            .unwrap()
            .unwrap();
        assert!(info.is_via_giveaway);
        assert_eq!(info.creator.map(|peer| peer.id), Some(1234));
        assert_eq!(info.used_date, None);
        assert_eq!(harness.single_call("payments.checkGiftCode")["slug"], "GIFTSLUG");
    }

    #[tokio::test]
    async fn test_apply_gift_code_absent_and_present() {
        let harness = Harness::new(MockTransport::default());
        assert_eq!(harness.api.apply_gift_code("X").await.unwrap(), None);

        let harness = Harness::new(
            MockTransport::default().reply("payments.applyGiftCode", json!({ "_": "updates" })),
        );
        assert_eq!(harness.api.apply_gift_code("X").await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_launch_prepaid_giveaway_request_shape() {
        let harness = Harness::new(
            MockTransport::default().reply("payments.launchPrepaidGiveaway", json!({ "_": "updates" })),
        );
        let channel = PeerRef::Channel {
            id: 10,
            access_hash: 20,
        };
        let purpose = GiveawayPurpose {
            boost_channel: channel,
            additional_channels: Vec::new(),
            countries: vec!["DE".to_string()],
            prize_description: None,
            only_new_subscribers: true,
            winners_are_visible: false,
            until_date: 1_800_000_000,
            currency: "USD".to_string(),
            amount: 0,
            random_id: 42,
        };

        let launched = harness
            .api
            .launch_prepaid_giveaway(channel, 7, &purpose)
            .await
            .unwrap();
        assert_eq!(launched, Some(true));

        let params = harness.single_call("payments.launchPrepaidGiveaway");
        assert_eq!(params["giveaway_id"], "7");
        assert_eq!(params["purpose"]["_"], "inputStorePaymentPremiumGiveaway");
        assert_eq!(params["purpose"]["random_id"], "42");
        assert_eq!(params["purpose"]["countries_iso2"][0], "DE");
    }

    #[tokio::test]
    async fn test_giveaway_info_ongoing() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.getGiveawayInfo",
            json!({
                "_": "payments.giveawayInfo",
                "participating": true,
                "start_date": 100,
                "disallowed_country": "XX"
            }),
        ));

        let info = harness
            .api
            .get_giveaway_info(PeerRef::Channel { id: 1, access_hash: 1 }, 9)
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(
            info,
            GiveawayInfo::Ongoing {
                is_participating: true,
                start_date: 100,
                ..
            }
        ));
    }
}
