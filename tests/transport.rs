//
//  vector-cli
//  tests/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP transport tests against a local mock server.

use mockito::{Matcher, Server};
use serde_json::json;

use vector_cli::api::request::Query;
use vector_cli::api::vector::{SiteRequest, WafRuleKind};
use vector_cli::api::{ClientConfig, ClientError, VectorClient};

fn client(server: &Server) -> VectorClient {
    let config = ClientConfig::new("test-token").with_base_url(server.url());
    VectorClient::with_default_transport(config).unwrap()
}

#[tokio::test]
async fn test_list_sites_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/vector/sites")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "15".into()),
        ]))
        .match_header("authorization", "Bearer test-token")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [{"id": 1, "status": "active"}],
                "meta": {"current_page": 1, "per_page": 15, "total": 1, "last_page": 1}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let page = client(&server).sites().list(1, 15).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "1");
    assert_eq!(page.meta.total, 1);
}

#[tokio::test]
async fn test_update_sends_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v1/vector/sites/42")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"php_version": "8.3"})))
        .with_status(200)
        .with_body(r#"{"data": {"id": "42", "php_version": "8.3"}}"#)
        .create_async()
        .await;

    let request = SiteRequest {
        php_version: Some("8.3".to_string()),
        ..Default::default()
    };
    let site = client(&server).sites().update("42", &request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(site.id, "42");
}

#[tokio::test]
async fn test_waf_rule_add_posts_value() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/vector/sites/42/waf/blocked-ips")
        .match_body(Matcher::Json(json!({"ip": "203.0.113.7"})))
        .with_status(201)
        .with_body(r#"{"data": {"id": 3, "ip": "203.0.113.7"}}"#)
        .create_async()
        .await;

    let rule = client(&server)
        .waf()
        .add("42", WafRuleKind::BlockedIps, "203.0.113.7")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rule.id, "3");
}

#[tokio::test]
async fn test_validation_failure_over_http() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/vector/sites")
        .with_status(422)
        .with_body(
            json!({
                "message": "The given data was invalid.",
                "errors": {"domain": ["The domain field is required."]}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client(&server)
        .sites()
        .create(&SiteRequest::default())
        .await
        .unwrap_err();

    let api = err.as_api_error().expect("api error");
    assert_eq!(api.status_code(), 422);
    assert_eq!(api.message(), "The given data was invalid.");
    assert_eq!(api.first_error(), Some("The domain field is required."));
}

#[tokio::test]
async fn test_no_content_response_is_empty_object() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v1/vector/webhooks/wh_1")
        .with_status(204)
        .create_async()
        .await;

    let value = client(&server).webhooks().delete("wh_1").await.unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_html_error_page_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/vector/sites/1")
        .with_status(503)
        .with_body("<html>Service Unavailable</html>")
        .create_async()
        .await;

    let err = client(&server)
        .get("/api/v1/vector/sites/1", &Query::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = ClientConfig::new("k").with_base_url("http://127.0.0.1:1");
    let client = VectorClient::with_default_transport(config).unwrap();

    let err = client.get("/x", &Query::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_account_summary_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/vector/account")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"data": {"name": "Acme", "plan": "pro", "sites_count": 4}}"#)
        .create_async()
        .await;

    let summary = client(&server).account().summary().await.unwrap();

    mock.assert_async().await;
    assert_eq!(summary, json!({"name": "Acme", "plan": "pro", "sites_count": 4}));
}

#[tokio::test]
async fn test_environment_secret_get_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v1/vector/sites/42/environments/production/secrets/sec_1",
        )
        .with_status(200)
        .with_body(r#"{"data": {"id": "sec_1", "name": "STRIPE_KEY"}}"#)
        .create_async()
        .await;

    let secret = client(&server)
        .secrets()
        .get("42", "production", "sec_1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(secret.id, "sec_1");
    assert_eq!(secret.name.as_deref(), Some("STRIPE_KEY"));
}

#[tokio::test]
async fn test_global_secret_get_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/vector/secrets/9")
        .with_status(200)
        .with_body(r#"{"data": {"id": 9, "name": "SENTRY_DSN", "created_at": null}}"#)
        .create_async()
        .await;

    let secret = client(&server).global_secrets().get("9").await.unwrap();

    mock.assert_async().await;
    assert_eq!(secret.id, "9");
    assert_eq!(
        secret.raw(),
        &json!({"id": 9, "name": "SENTRY_DSN", "created_at": null})
    );
}
