//! Typed calls into the remote service.
//!
//! Every operation issues exactly one request and normalizes the reply into an
//! application model. `Ok(None)` means the call produced nothing to update;
//! `Err` only carries transport failures, which are never retried here.

mod boosts_api;
mod contacts_api;
mod gifts_api;
mod payments_api;
mod stars_api;

use crate::events::Notifier;
use crate::rpc::{self, RpcError, RpcMethod, Transport};
use crate::store::MediaCache;

#[derive(Debug, Clone)]
pub struct CoreApi<T> {
    transport: T,
    notifier: Notifier,
    media: MediaCache,
}

impl<T: Transport> CoreApi<T> {
    pub fn new(transport: T, notifier: Notifier, media: MediaCache) -> Self {
        Self {
            transport,
            notifier,
            media,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn media(&self) -> &MediaCache {
        &self.media
    }

    async fn invoke<M: RpcMethod>(&self, request: &M) -> Result<Option<M::Response>, RpcError> {
        rpc::invoke(&self.transport, request).await
    }
}
