//! Sentinel-collapsing boundary over the typed FDC client.
//!
//! The client keeps transport, HTTP-status, and schema failures distinct;
//! tool callers only need success/absence. The collapse happens here, once,
//! with the dropped detail preserved in the logs.

use fdc_client::FdcClient;
use fdc_client::model::{ProductDeliveryRequest, TankDeliveryResponse};
use tracing::warn;

/// Service for communicating with the FDC server.
///
/// One instance is constructed at startup and handed to whatever registers
/// tools; there is no process-wide singleton.
#[derive(Clone)]
pub struct FdcService {
    client: FdcClient,
}

impl FdcService {
    #[must_use]
    pub fn new(client: FdcClient) -> Self {
        Self { client }
    }

    /// Fetch the latest tank delivery snapshot, optionally filtered to one
    /// device.
    ///
    /// Returns `None` when the data could not be obtained for any reason;
    /// `None` means "unknown", not "no delivery occurred". The cause is
    /// logged and otherwise discarded.
    pub async fn get_tank_delivery(
        &self,
        device_id: Option<u32>,
    ) -> Option<TankDeliveryResponse> {
        match self.client.tank_delivery(device_id).await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(device_id, error = %e, "error fetching tank delivery data");
                None
            }
        }
    }

    /// Submit a product delivery request.
    ///
    /// `true` only when the FDC confirmed acceptance with a 2xx status. A
    /// rejected request and a network failure both come back as `false`;
    /// callers cannot tell the two apart.
    pub async fn create_product_delivery(
        &self,
        product_no: f64,
        tank_no: f64,
        volume_to_deliver: f64,
    ) -> bool {
        let request = ProductDeliveryRequest {
            product_no,
            tank_no,
            volume_to_deliver,
        };
        match self.client.product_delivery(&request).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    product_no,
                    tank_no,
                    volume_to_deliver,
                    error = %e,
                    "error creating product delivery"
                );
                false
            }
        }
    }
}
