//! Data model mirroring the FDC tank-delivery wire contract.
//!
//! The FDC speaks PascalCase JSON; every field carries an explicit
//! `#[serde(rename)]` alias so the mapping lives in one declarative table per
//! type and is applied identically when parsing and when re-serializing.
//! Parsing is all-or-nothing: a missing or mistyped field anywhere in the
//! tree rejects the whole document. Unknown wire fields are tolerated.
//!
//! None of these types offer mutation; each instance is reconstructed fresh
//! per response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of one fill/delivery cycle for a single measurement device.
///
/// Timestamps are opaque strings in whatever format the controller emits;
/// they are not parsed further. `sales_volume` is billing-relevant and kept
/// as an exact decimal so it never round-trips through `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryData {
    #[serde(rename = "StartingDateTime")]
    pub starting_date_time: String,
    #[serde(rename = "EndingDateTime")]
    pub ending_date_time: String,
    #[serde(rename = "StartingHeight")]
    pub starting_height: f64,
    #[serde(rename = "StartingVolume")]
    pub starting_volume: f64,
    #[serde(rename = "StartingVolumeTC")]
    pub starting_volume_tc: f64,
    #[serde(rename = "EndingHeight")]
    pub ending_height: f64,
    #[serde(rename = "EndingVolume")]
    pub ending_volume: f64,
    #[serde(rename = "EndingVolumeTC")]
    pub ending_volume_tc: f64,
    #[serde(rename = "DeliveredVolume")]
    pub delivered_volume: f64,
    #[serde(rename = "DeliveredVolumeTC")]
    pub delivered_volume_tc: f64,
    #[serde(rename = "StartingWaterHeight")]
    pub starting_water_height: f64,
    #[serde(rename = "StartingWaterVolume")]
    pub starting_water_volume: f64,
    #[serde(rename = "EndingWaterHeight")]
    pub ending_water_height: f64,
    #[serde(rename = "EndingWaterVolume")]
    pub ending_water_volume: f64,
    #[serde(rename = "StartingTemperature")]
    pub starting_temperature: f64,
    #[serde(rename = "EndingTemperature")]
    pub ending_temperature: f64,
    #[serde(
        rename = "SalesVolume",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub sales_volume: Decimal,
}

/// One monitored device's entry within an [`FdcData`] snapshot.
///
/// `device_id` is unique within a single snapshot, not globally. An empty
/// `error_code` means no error; the code vocabulary is owned by the
/// controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceClass {
    #[serde(rename = "Type")]
    pub device_type: String,
    #[serde(rename = "DeviceID")]
    pub device_id: i64,
    #[serde(rename = "DeliveryData")]
    pub delivery_data: DeliveryData,
    #[serde(rename = "ErrorCode")]
    pub error_code: String,
}

/// Timestamped snapshot of device entries, in wire order.
///
/// An empty `device_classes` sequence is structurally valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdcData {
    #[serde(rename = "FDCTimeStamp")]
    pub fdc_time_stamp: String,
    #[serde(rename = "DeviceClasses")]
    pub device_classes: Vec<DeviceClass>,
}

/// Full `GET /tank-delivery` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankDeliveryResponse {
    #[serde(rename = "RequestType")]
    pub request_type: String,
    #[serde(rename = "ApplicationSender")]
    pub application_sender: String,
    #[serde(rename = "WorkstationID")]
    pub workstation_id: String,
    #[serde(rename = "RequestID")]
    pub request_id: i64,
    #[serde(rename = "OverallResult")]
    pub overall_result: String,
    #[serde(rename = "FDCdata")]
    pub fdc_data: FdcData,
}

/// Body of `POST /product-delivery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDeliveryRequest {
    #[serde(rename = "ProductNo")]
    pub product_no: f64,
    #[serde(rename = "TankNo")]
    pub tank_no: f64,
    #[serde(rename = "VolumeToDeliver")]
    pub volume_to_deliver: f64,
}

/// Wire-shaped sample used by this crate's tests.
#[cfg(test)]
pub(crate) fn sample_response_json() -> serde_json::Value {
    serde_json::json!({
        "RequestType": "GetTankDeliveryData",
        "ApplicationSender": "FdcService",
        "WorkstationID": "WS-01",
        "RequestID": 42,
        "OverallResult": "Success",
        "FDCdata": {
            "FDCTimeStamp": "2024-03-08T06:15:00",
            "DeviceClasses": [
                {
                    "Type": "TLG",
                    "DeviceID": 1,
                    "ErrorCode": "",
                    "DeliveryData": {
                        "StartingDateTime": "2024-03-08T05:00:00",
                        "EndingDateTime": "2024-03-08T05:45:00",
                        "StartingHeight": 421.5,
                        "StartingVolume": 9050.0,
                        "StartingVolumeTC": 9012.3,
                        "EndingHeight": 1650.2,
                        "EndingVolume": 28950.0,
                        "EndingVolumeTC": 28810.4,
                        "DeliveredVolume": 19900.0,
                        "DeliveredVolumeTC": 19798.1,
                        "StartingWaterHeight": 12.0,
                        "StartingWaterVolume": 55.4,
                        "EndingWaterHeight": 12.5,
                        "EndingWaterVolume": 57.9,
                        "StartingTemperature": 14.8,
                        "EndingTemperature": 15.1,
                        "SalesVolume": 1234.567
                    }
                }
            ]
        }
    })
}
