use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{RpcError, Transport};
use crate::config::CoreConfig;

/// JSON-over-HTTP bridge to a process that speaks the actual protocol.
///
/// Each call is `POST {endpoint}/{method}` with the request object as body.
/// The reply body is the TL result, `null` or empty when there is none.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Result<Self, RpcError> {
        let endpoint = config.endpoint.clone().ok_or(RpcError::NotConfigured)?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|source| RpcError::Transport {
                method: "client.build",
                source,
            })?;
        Ok(Self::new(endpoint, client))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.endpoint, method)
    }
}

impl Transport for HttpTransport {
    async fn call(&self, method: &'static str, params: Value) -> Result<Option<Value>, RpcError> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(&params)
            .send()
            .await
            .map_err(|source| RpcError::Transport { method, source })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Status {
                method,
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| RpcError::Transport { method, source })?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|source| RpcError::Decode { method, source })?;
        Ok((!value.is_null()).then_some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url_joins_endpoint() {
        let transport = HttpTransport::new("http://127.0.0.1:9000/", Client::new());
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9000");
        assert_eq!(
            transport.method_url("payments.getPaymentForm"),
            "http://127.0.0.1:9000/payments.getPaymentForm"
        );
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let err = HttpTransport::from_config(&CoreConfig::default()).unwrap_err();
        assert!(matches!(err, RpcError::NotConfigured));
    }
}
