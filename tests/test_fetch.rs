//! `HttpPositionSource` behavior against a local stub endpoint.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use tokio::net::TcpListener;

use tenure::config::SourceConfig;
use tenure::error::FetchError;
use tenure::fetch::{HttpPositionSource, PositionSource};

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source_config(addr: SocketAddr) -> SourceConfig {
    SourceConfig {
        url: format!("http://{addr}/positions"),
        api_key: "test-key".to_string(),
        timeout_ms: 2_000,
    }
}

#[tokio::test]
async fn sends_both_auth_headers_and_decodes_records() {
    let captured: Arc<Mutex<Vec<(Option<String>, Option<String>)>>> =
        Arc::new(Mutex::new(Vec::new()));

    let state = Arc::clone(&captured);
    let app = Router::new().route(
        "/positions",
        get(move |headers: HeaderMap| {
            let state = Arc::clone(&state);
            async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from)
                };
                state
                    .lock()
                    .unwrap()
                    .push((header("authorization"), header("apikey")));

                Json(serde_json::json!([
                    {
                        "id": 1,
                        "position_name": "Engineer",
                        "company_name": "Acme",
                        "start_date": "2021-01",
                        "end_date": "2021-12",
                        "city": "Chicago",
                        "state": "Illinois"
                    }
                ]))
            }
        }),
    );

    let addr = spawn(app).await;
    let source = HttpPositionSource::new(source_config(addr));

    let records = source.fetch_positions().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company_name, "Acme");
    assert_eq!(records[0].end_date.as_deref(), Some("2021-12"));

    let seen = captured.lock().unwrap();
    assert_eq!(seen.len(), 1, "exactly one fetch per call");
    assert_eq!(seen[0].0.as_deref(), Some("Bearer test-key"));
    assert_eq!(seen[0].1.as_deref(), Some("test-key"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let app = Router::new().route(
        "/positions",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let addr = spawn(app).await;
    let source = HttpPositionSource::new(source_config(addr));

    let err = source.fetch_positions().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503 }));
}

#[tokio::test]
async fn undecodable_body_is_an_error() {
    let app = Router::new().route("/positions", get(|| async { "definitely not json" }));
    let addr = spawn(app).await;
    let source = HttpPositionSource::new(source_config(addr));

    let err = source.fetch_positions().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}
