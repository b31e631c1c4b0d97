use super::*;
use crate::models::{BoostsList, BoostsStatus, MyBoosts, PeerRef};
use crate::rpc::methods::{ApplyBoost, GetBoostsList, GetBoostsStatus, GetMyBoosts, GetUserBoosts};
use crate::rpc::tl;

impl<T: Transport> CoreApi<T> {
    pub async fn get_boosts_status(&self, peer: PeerRef) -> Result<Option<BoostsStatus>, RpcError> {
        let request = GetBoostsStatus {
            peer: peer.input_peer(),
        };
        let status = self.invoke(&request).await?;
        Ok(status.map(|status| BoostsStatus::from_wire(&status)))
    }

    /// One page of boosts applied to `peer`; `gifts` restricts the list to gifted boosts.
    pub async fn get_boosts_list(
        &self,
        peer: PeerRef,
        gifts: bool,
        offset: &str,
        limit: i32,
    ) -> Result<Option<BoostsList>, RpcError> {
        let request = GetBoostsList {
            gifts,
            peer: peer.input_peer(),
            offset: offset.to_string(),
            limit,
        };
        let list = self.invoke(&request).await?;
        Ok(list.map(|list| BoostsList::from_wire(&list)))
    }

    /// Boosts `user` has applied to `peer`.
    pub async fn get_user_boosts(
        &self,
        peer: PeerRef,
        user: PeerRef,
    ) -> Result<Option<BoostsList>, RpcError> {
        let request = GetUserBoosts {
            peer: peer.input_peer(),
            user_id: user.input_user().unwrap_or(tl::InputUser::Empty),
        };
        let list = self.invoke(&request).await?;
        Ok(list.map(|list| BoostsList::from_wire(&list)))
    }

    pub async fn get_my_boosts(&self) -> Result<Option<MyBoosts>, RpcError> {
        let boosts = self.invoke(&GetMyBoosts {}).await?;
        Ok(boosts.map(|boosts| MyBoosts::from_wire(&boosts)))
    }

    /// Spend boost `slots` on `peer`; all free slots are used when `slots` is `None`.
    pub async fn apply_boost(
        &self,
        peer: PeerRef,
        slots: Option<Vec<i32>>,
    ) -> Result<Option<MyBoosts>, RpcError> {
        let request = ApplyBoost {
            slots,
            peer: peer.input_peer(),
        };
        let boosts = self.invoke(&request).await?;
        Ok(boosts.map(|boosts| MyBoosts::from_wire(&boosts)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::test_support::{Harness, MockTransport};
    use super::*;

    fn channel() -> PeerRef {
        PeerRef::Channel {
            id: 1_000_000_001,
            access_hash: -42,
        }
    }

    #[tokio::test]
    async fn test_get_boosts_list() {
        let harness = Harness::new(MockTransport::default().reply(
            "premium.getBoostsList",
            json!({
                "count": 3,
                "boosts": [
                    { "id": "b1", "user_id": "11", "date": 1, "expires": 100, "multiplier": 2 },
                    { "id": "b2", "date": 2, "expires": 200, "gift": true, "unclaimed": true }
                ],
                "next_offset": "o2",
                "users": [{ "_": "user", "id": "11", "first_name": "Grace" }]
            }),
        ));

        let list = harness
            .api
            .get_boosts_list(channel(), true, "", 2)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(list.total_count, 3);
        assert_eq!(list.boosts[0].multiplier, 2);
        assert!(list.boosts[1].is_unclaimed);
        assert_eq!(list.users[0].display_name(), "Grace");

        let params = harness.single_call("premium.getBoostsList");
        assert_eq!(params["gifts"], true);
        assert_eq!(params["peer"]["channel_id"], "1000000001");
        assert_eq!(params["peer"]["access_hash"], "-42");
    }

    #[tokio::test]
    async fn test_apply_boost_without_slots() {
        let harness = Harness::new(MockTransport::default().reply(
            "premium.applyBoost",
            json!({
                "my_boosts": [
                    { "slot": 0, "peer": { "_": "peerChannel", "channel_id": "1000000001" }, "date": 5, "expires": 50 }
                ]
            }),
        ));

        let boosts = harness.api.apply_boost(channel(), None).await.unwrap().unwrap();
        assert_eq!(boosts.boosts.len(), 1);
        assert_eq!(boosts.free_slots().count(), 0);

        let params = harness.single_call("premium.applyBoost");
        assert!(params.get("slots").is_none());
    }

    #[tokio::test]
    async fn test_get_user_boosts_sends_input_user() {
        let harness = Harness::new(MockTransport::default());

        let list = harness
            .api
            .get_user_boosts(channel(), PeerRef::User { id: 11, access_hash: 3 })
            .await
            .unwrap();
        assert!(list.is_none());

        let params = harness.single_call("premium.getUserBoosts");
        assert_eq!(params["user_id"]["_"], "inputUser");
        assert_eq!(params["user_id"]["user_id"], "11");
    }

    #[tokio::test]
    async fn test_get_boosts_status_absent() {
        let mut harness = Harness::new(MockTransport::default());
        assert!(harness.api.get_boosts_status(channel()).await.unwrap().is_none());
        assert!(harness.api.get_my_boosts().await.unwrap().is_none());
        assert!(harness.drain_events().is_empty());
        assert_eq!(harness.api.transport().calls().len(), 2);
    }
}
