use super::*;
use crate::models::{PeerRef, StarsStatus, StarsTopupOption, StarsTransactionsQuery};
use crate::rpc::methods::{GetStarsGiftOptions, GetStarsStatus, GetStarsTopupOptions};
use crate::rpc::tl;

impl<T: Transport> CoreApi<T> {
    /// Balance and the most recent transactions of `peer` (usually [`PeerRef::Myself`]).
    pub async fn get_stars_status(&self, peer: PeerRef) -> Result<Option<StarsStatus>, RpcError> {
        let request = GetStarsStatus {
            peer: peer.input_peer(),
        };
        let status = self.invoke(&request).await?;
        Ok(status.map(|status| self.stars_status(&status)))
    }

    pub async fn get_stars_transactions(
        &self,
        query: &StarsTransactionsQuery,
    ) -> Result<Option<StarsStatus>, RpcError> {
        let status = self.invoke(&query.to_request()).await?;
        Ok(status.map(|status| self.stars_status(&status)))
    }

    pub async fn get_stars_topup_options(&self) -> Result<Option<Vec<StarsTopupOption>>, RpcError> {
        let options = self.invoke(&GetStarsTopupOptions {}).await?;
        Ok(options.map(|options| options.iter().map(StarsTopupOption::from_wire).collect()))
    }

    /// Options for gifting stars, to `user` or to anyone when unset.
    pub async fn get_stars_gift_options(
        &self,
        user: Option<PeerRef>,
    ) -> Result<Option<Vec<StarsTopupOption>>, RpcError> {
        let request = GetStarsGiftOptions {
            user_id: user.as_ref().and_then(PeerRef::input_user),
        };
        let options = self.invoke(&request).await?;
        Ok(options.map(|options| options.iter().map(StarsTopupOption::from_wire).collect()))
    }

    fn stars_status(&self, status: &tl::StarsStatus) -> StarsStatus {
        for tx in status.history.iter().flatten() {
            if let Some(photo) = &tx.photo {
                self.media.register_web_document(photo);
            }
        }
        StarsStatus::from_wire(status)
    }
}
