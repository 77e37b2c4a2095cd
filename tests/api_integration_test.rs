use axum::http::StatusCode;
use axum_test::TestServer;
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;
use user_report::{
    app_router, report_builder_from_config, AppConfig, AppState, Credentials, Endpoints,
};

fn test_server(server: &MockServer, static_dir: &std::path::Path) -> TestServer {
    let config = AppConfig {
        endpoints: Endpoints {
            random_user: server.url("/api/"),
            countries: server.url("/v3.1"),
            exchange: server.url("/v6"),
            news: server.url("/v2/everything"),
        },
        credentials: Credentials::default(),
        request_timeout: Some(Duration::from_secs(5)),
    };
    let builder = report_builder_from_config(&config).unwrap();

    TestServer::new(app_router(AppState::new(builder), static_dir)).unwrap()
}

#[tokio::test]
async fn test_user_report_endpoint_returns_report() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [{
                    "gender": "female",
                    "name": {"first": "Camila", "last": "Rojas"},
                    "location": {
                        "street": {"number": 9, "name": "Calle Larga"},
                        "city": "Valparaíso",
                        "country": "Chile"
                    },
                    "dob": {"date": "1990-01-15T12:00:00.000Z", "age": 35},
                    "picture": {"large": "https://randomuser.me/api/portraits/women/9.jpg"}
                }]
            }));
    });
    upstream.mock(|when, then| {
        when.method(GET).path("/v3.1/name/Chile");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{
                "name": {"common": "Chile"},
                "capital": ["Santiago"],
                "languages": {"spa": "Spanish"},
                "currencies": {"CLP": {"name": "Chilean peso", "symbol": "$"}},
                "flags": {"png": "https://flagcdn.com/w320/cl.png"}
            }]));
    });

    let static_dir = TempDir::new().unwrap();
    let server = test_server(&upstream, static_dir.path());

    let response = server.get("/api/user-report").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["userData"]["firstName"], "Camila");
    assert_eq!(json["userData"]["address"], "9 Calle Larga");
    assert_eq!(json["userData"]["age"], 35);
    assert_eq!(json["countryData"]["capital"], "Santiago");
    assert_eq!(json["countryData"]["languages"], serde_json::json!(["Spanish"]));
    assert_eq!(json["countryData"]["flag"], "https://flagcdn.com/w320/cl.png");
    assert_eq!(
        json["exchangeData"],
        serde_json::json!({"available": false, "base": "CLP", "toUSD": null, "toKZT": null})
    );
    assert_eq!(json["newsData"], serde_json::json!([]));
}

#[tokio::test]
async fn test_user_report_endpoint_person_failure() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(503);
    });

    let static_dir = TempDir::new().unwrap();
    let server = test_server(&upstream, static_dir.path());

    let response = server.get("/api/user-report").expect_failure().await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({"error": "Failed to fetch data"})
    );
}

#[tokio::test]
async fn test_static_front_end_is_served() {
    let upstream = MockServer::start();
    let static_dir = TempDir::new().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!doctype html><title>User report</title>",
    )
    .unwrap();

    let server = test_server(&upstream, static_dir.path());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("User report"));
}
