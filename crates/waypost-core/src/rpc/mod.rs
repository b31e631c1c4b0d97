//! Boundary with the remote procedure service.
//!
//! The transport itself (connection lifecycle, encryption, retries) lives
//! outside this crate; [`Transport`] is the seam. Everything that crosses it
//! is JSON shaped after the TL schema, see [`tl`].

pub mod codec;
pub mod http;
pub mod methods;
pub mod tl;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpTransport;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport failure calling {method}: {source}")]
    Transport {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} failed with status {status}: {body}")]
    Status {
        method: &'static str,
        status: u16,
        body: String,
    },
    #[error("failed to encode {method} request: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode {method} response: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("no RPC endpoint configured")]
    NotConfigured,
}

/// A typed TL method: the request object is `Self`, the reply is `Response`.
pub trait RpcMethod: Serialize {
    const NAME: &'static str;
    type Response: DeserializeOwned;
}

/// Issues one request and hands back the raw reply.
///
/// `Ok(None)` means the remote produced nothing usable.
pub trait Transport: Send + Sync {
    fn call(
        &self,
        method: &'static str,
        params: Value,
    ) -> impl Future<Output = Result<Option<Value>, RpcError>> + Send;
}

/// Encode `request`, issue exactly one call, decode the reply.
///
/// A missing reply and a JSON `null` both come back as `Ok(None)`.
pub async fn invoke<T, M>(transport: &T, request: &M) -> Result<Option<M::Response>, RpcError>
where
    T: Transport,
    M: RpcMethod,
{
    let params = serde_json::to_value(request).map_err(|source| RpcError::Encode {
        method: M::NAME,
        source,
    })?;

    tracing::debug!(method = M::NAME, "rpc call");

    let Some(raw) = transport.call(M::NAME, params).await? else {
        tracing::debug!(method = M::NAME, "rpc call returned nothing");
        return Ok(None);
    };
    if raw.is_null() {
        return Ok(None);
    }

    serde_json::from_value(raw)
        .map(Some)
        .map_err(|source| RpcError::Decode {
            method: M::NAME,
            source,
        })
}
