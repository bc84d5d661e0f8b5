//! Service-level behavior against a mock FDC endpoint: every failure mode
//! collapses to the sentinel (`None` / `false`), success round-trips the
//! typed snapshot.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use fdc_client::{FdcClient, FdcConfig};
use fdc_mcp::service::FdcService;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

fn sample_response_json() -> Value {
    json!({
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
                    "DeviceID": 7,
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

struct MockFdc {
    base_url: String,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl MockFdc {
    async fn spawn(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let handle = tokio::spawn(async move { server.await });
        Self {
            base_url: format!("http://{addr}"),
            shutdown_tx,
            handle,
        }
    }

    fn service(&self) -> FdcService {
        let client = FdcClient::new(FdcConfig::new(self.base_url.clone())).expect("valid config");
        FdcService::new(client)
    }

    async fn stop(self) {
        let _ = self.shutdown_tx.send(());
        self.handle
            .await
            .expect("server task join")
            .expect("server result");
    }
}

#[tokio::test]
async fn get_tank_delivery_returns_snapshot_and_honours_filter() {
    let queries: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/tank-delivery",
            get(
                |State(queries): State<Arc<Mutex<Vec<Option<String>>>>>,
                 RawQuery(query): RawQuery| async move {
                    queries.lock().expect("lock").push(query);
                    axum::Json(sample_response_json())
                },
            ),
        )
        .with_state(queries.clone());
    let mock = MockFdc::spawn(app).await;
    let service = mock.service();

    let all = service.get_tank_delivery(None).await.expect("snapshot");
    assert_eq!(all.overall_result, "Success");
    assert_eq!(all.fdc_data.device_classes[0].device_id, 7);

    let one = service.get_tank_delivery(Some(7)).await.expect("snapshot");
    assert_eq!(one.request_id, 42);

    let seen = queries.lock().expect("lock").clone();
    assert_eq!(seen, vec![None, Some("device_id=7".to_string())]);

    mock.stop().await;
}

#[tokio::test]
async fn get_tank_delivery_collapses_500_to_none() {
    let app = Router::new().route(
        "/tank-delivery",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "controller offline") }),
    );
    let mock = MockFdc::spawn(app).await;

    assert!(mock.service().get_tank_delivery(None).await.is_none());

    mock.stop().await;
}

#[tokio::test]
async fn get_tank_delivery_collapses_bad_body_to_none() {
    let app = Router::new().route("/tank-delivery", get(|| async { "<html>oops</html>" }));
    let mock = MockFdc::spawn(app).await;

    assert!(mock.service().get_tank_delivery(Some(3)).await.is_none());

    mock.stop().await;
}

#[tokio::test]
async fn get_tank_delivery_collapses_timeout_to_none() {
    // No graceful shutdown: the sleeping request would stall it, so the
    // server task is aborted at the end.
    let app = Router::new().route(
        "/tank-delivery",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            "too late"
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    let handle = tokio::spawn(async move { axum::serve(listener, app).await });

    let config =
        FdcConfig::new(format!("http://{addr}")).with_timeout(Duration::from_millis(100));
    let service = FdcService::new(FdcClient::new(config).expect("valid config"));

    assert!(service.get_tank_delivery(None).await.is_none());

    handle.abort();
}

#[tokio::test]
async fn get_tank_delivery_collapses_connection_failure_to_none() {
    // Bind then drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    drop(listener);

    let client = FdcClient::new(FdcConfig::new(format!("http://{addr}"))).expect("valid config");
    let service = FdcService::new(client);

    assert!(service.get_tank_delivery(None).await.is_none());
}

#[tokio::test]
async fn create_product_delivery_true_on_2xx_and_sends_wire_body() {
    let bodies: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/product-delivery",
            post(
                |State(bodies): State<Arc<Mutex<Vec<Value>>>>, body: Bytes| async move {
                    let parsed: Value = serde_json::from_slice(&body).expect("json body");
                    bodies.lock().expect("lock").push(parsed);
                    StatusCode::CREATED
                },
            ),
        )
        .with_state(bodies.clone());
    let mock = MockFdc::spawn(app).await;

    let accepted = mock.service().create_product_delivery(1.0, 2.0, 50.0).await;
    assert!(accepted);

    let seen = bodies.lock().expect("lock").clone();
    assert_eq!(
        seen,
        vec![json!({"ProductNo": 1.0, "TankNo": 2.0, "VolumeToDeliver": 50.0})]
    );

    mock.stop().await;
}

#[tokio::test]
async fn create_product_delivery_false_on_rejection() {
    let app = Router::new().route(
        "/product-delivery",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "pump busy") }),
    );
    let mock = MockFdc::spawn(app).await;

    let accepted = mock.service().create_product_delivery(1.0, 2.0, 50.0).await;
    assert!(!accepted);

    mock.stop().await;
}
