//! End-to-end tests against a real listener.

use std::time::Duration;

use lb_demo_server::probe::{Endpoint, ProbeClient};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

async fn get_json(client: &reqwest::Client, url: &str) -> (StatusCode, Value) {
    let res = client.get(url).send().await.expect("Server unreachable");
    let status = res.status();
    assert_eq!(res.headers()["content-type"], "application/json");
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_root_over_tcp() {
    let server = common::start_server("server-1", 3001).await;
    let client = common::client();

    let (status, json) = get_json(&client, &server.url("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Hello from Load Balanced Server!");
    assert_eq!(json["serverId"], "server-1");
    assert_eq!(json.as_object().unwrap().len(), 4);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_health_uptime_non_decreasing() {
    let server = common::start_server("server-2", 3002).await;
    let client = common::client();

    let mut last = 0.0;
    for _ in 0..5 {
        let (status, json) = get_json(&client, &server.url("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["serverId"], "server-2");

        let uptime = json["uptime"].as_f64().unwrap();
        assert!(uptime >= last, "uptime went backwards: {uptime} < {last}");
        last = uptime;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_status_reports_configured_port() {
    let server = common::start_server("server-3", 3003).await;
    let client = common::client();

    let (status, json) = get_json(&client, &server.url("/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["port"], 3003);
    assert_eq!(json["serverId"], "server-3");
    assert!(json["hostname"].is_string());
    assert!(json["uptime"].is_number());
    assert!(json["timestamp"].is_string());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_not_found_body() {
    let server = common::start_server("unknown", 3000).await;
    let client = common::client();

    let (status, json) = get_json(&client, &server.url("/foo")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({"error": "Not Found", "serverId": "unknown", "path": "/foo"})
    );

    let res = client.post(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let json: Value = res.json().await.unwrap();
    assert_eq!(json["path"], "/");

    let (status, json) = get_json(&client, &server.url("/status/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["path"], "/status/");

    let (status, json) = get_json(&client, &server.url("/?x=1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["path"], "/?x=1");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_serving() {
    let server = common::start_server("server-4", 3004).await;
    let client = common::client();

    let health_url = server.url("/health");
    let (status, _) = get_json(&client, &health_url).await;
    assert_eq!(status, StatusCode::OK);

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());

    assert!(client.get(&health_url).send().await.is_err());
}

#[tokio::test]
async fn test_restart_resets_uptime() {
    let first = common::start_server("server-5", 3005).await;
    tokio::time::sleep(Duration::from_millis(300)).await;

    let probe = ProbeClient::with_client(common::client(), format!("http://{}", first.addr));
    let before = probe.fetch(Endpoint::Health).await.unwrap();
    assert!(before.body["uptime"].as_f64().unwrap() >= 0.3);
    first.shutdown.trigger();

    let second = common::start_server("server-5", 3005).await;
    let probe = ProbeClient::with_client(common::client(), format!("http://{}", second.addr));
    let after = probe.fetch(Endpoint::Health).await.unwrap();
    assert!(after.body["uptime"].as_f64().unwrap() < 0.3);

    second.shutdown.trigger();
}

#[tokio::test]
async fn test_probe_spread_across_instances() {
    let a = common::start_server("a", 3001).await;
    let b = common::start_server("b", 3002).await;

    let mut spread = ProbeClient::with_client(common::client(), format!("http://{}", a.addr))
        .spread(3)
        .await;
    let from_b = ProbeClient::with_client(common::client(), format!("http://{}", b.addr))
        .spread(2)
        .await;
    for (server_id, count) in from_b.counts() {
        for _ in 0..*count {
            spread.record(Some(server_id.as_str()));
        }
    }

    assert_eq!(spread.counts().get("a"), Some(&3));
    assert_eq!(spread.counts().get("b"), Some(&2));
    assert_eq!(spread.failures(), 0);

    a.shutdown.trigger();
    b.shutdown.trigger();
}

#[tokio::test]
async fn test_probe_reports_unreachable_server() {
    let server = common::start_server("gone", 3000).await;
    let addr = server.addr;
    server.shutdown.trigger();
    server.handle.await.unwrap().unwrap();

    let probe = ProbeClient::with_client(common::client(), format!("http://{addr}"));
    let spread = probe.spread(2).await;
    assert_eq!(spread.failures(), 2);
    assert!(probe.fetch(Endpoint::Status).await.is_err());
}
