//! HTTP client for the FDC service.
//!
//! Each operation performs exactly one outbound call: no retries, no
//! caching. Failures stay typed ([`FdcError`]); collapsing them into a
//! sentinel is the caller's decision, not this crate's.

use crate::config::FdcConfig;
use crate::error::{FdcError, Result};
use crate::model::{ProductDeliveryRequest, TankDeliveryResponse};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Client for one FDC endpoint.
///
/// Cheap to clone; clones share the same connection pool and configuration.
/// The configuration is immutable after construction.
#[derive(Clone, Debug)]
pub struct FdcClient {
    inner: Arc<FdcClientInner>,
}

#[derive(Debug)]
struct FdcClientInner {
    config: FdcConfig,
    client: Client,
}

impl FdcClient {
    /// Build a client from a static config.
    ///
    /// # Errors
    ///
    /// Returns [`FdcError::Config`] if the base URL does not parse.
    pub fn new(config: FdcConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            FdcError::Config(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;

        Ok(Self {
            inner: Arc::new(FdcClientInner {
                config,
                client: Client::new(),
            }),
        })
    }

    /// Fetch the latest tank delivery snapshot, optionally filtered to one
    /// device.
    ///
    /// Issues `GET {base}/tank-delivery`, appending `?device_id=N` only when
    /// a filter was supplied.
    ///
    /// # Errors
    ///
    /// - [`FdcError::Transport`] if the request never completes
    /// - [`FdcError::Http`] on a non-2xx status
    /// - [`FdcError::Schema`] if the body does not match the wire contract
    pub async fn tank_delivery(
        &self,
        device_id: Option<u32>,
    ) -> Result<TankDeliveryResponse> {
        let mut url = self.endpoint("/tank-delivery")?;
        if let Some(id) = device_id {
            url.query_pairs_mut()
                .append_pair("device_id", &id.to_string());
        }

        debug!(url = %url, "fetching tank delivery data");
        let response = self
            .inner
            .client
            .get(url)
            .timeout(self.inner.config.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(http_status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| FdcError::Schema(format!("invalid tank delivery response: {e}")))
    }

    /// Submit a product delivery request.
    ///
    /// Issues `POST {base}/product-delivery`; a 2xx status is the only
    /// confirmation, the response body is not interpreted.
    ///
    /// # Errors
    ///
    /// - [`FdcError::Transport`] if the request never completes
    /// - [`FdcError::Http`] on a non-2xx status
    pub async fn product_delivery(&self, request: &ProductDeliveryRequest) -> Result<()> {
        let url = self.endpoint("/product-delivery")?;

        debug!(
            url = %url,
            product_no = request.product_no,
            tank_no = request.tank_no,
            volume_to_deliver = request.volume_to_deliver,
            "creating product delivery"
        );
        let response = self
            .inner
            .client
            .post(url)
            .json(request)
            .timeout(self.inner.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(http_status_error(status, &body))
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!(
            "{}{path}",
            self.inner.config.base_url.trim_end_matches('/')
        );
        Url::parse(&url).map_err(|e| FdcError::Config(format!("Invalid URL '{url}': {e}")))
    }
}

fn http_status_error(status: StatusCode, body: &str) -> FdcError {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    FdcError::Http(format!("FDC returned {} {reason}: {body}", status.as_u16()))
}
