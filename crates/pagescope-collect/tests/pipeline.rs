//! End-to-end pipeline tests over a mock Graph server.
//!
//! These drive [`collect_all_pages`] through a real `GraphClient` so the
//! whole chain is exercised: URL building, envelope parsing, best-effort
//! failure handling, extraction, and aggregation.

use pagescope_collect::collect_all_pages;
use pagescope_graph::GraphClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GraphClient {
    GraphClient::new("test-token", "v19.0", 30, "pagescope-test/0.1", 0, 0, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn degraded_page_still_produces_record_with_post_signals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/me/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": [ { "id": "1", "name": "Acme" } ]
        })))
        .mount(&server)
        .await;

    // Detail endpoint is down for this page.
    Mock::given(method("GET"))
        .and(path("/v19.0/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": [
                { "message": "Contact us at sales@acme.com or sales@ACME.com" }
            ]
        })))
        .mount(&server)
        .await;

    // Insights denied, as for pages without the permission.
    Mock::given(method("GET"))
        .and(path("/v19.0/1/insights"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&serde_json::json!({
            "error": {
                "message": "(#200) Requires read_insights permission",
                "type": "OAuthException",
                "code": 200
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = collect_all_pages(&client, 10).await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.page_id, "1");
    assert_eq!(record.page_name, "Acme");
    assert!(record.official_phone.is_none());
    assert!(record.official_emails.is_none());
    assert!(record.website.is_none());
    assert_eq!(
        record.emails_from_posts,
        vec!["sales@acme.com"],
        "case variants must collapse to one lowercased entry"
    );
    assert!(record.phones_from_posts.is_empty());
    assert!(record.insights.is_none());
}

#[tokio::test]
async fn two_pages_collect_in_discovery_order_with_full_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/me/accounts"))
        .and(query_param("access_token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": [
                { "id": "111", "name": "Acme Coffee", "username": "acmecoffee" },
                { "id": "222", "name": "Acme Outlet" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "id": "111",
            "name": "Acme Coffee",
            "username": "acmecoffee",
            "category": "Coffee Shop",
            "phone": "(803) 555-0101",
            "emails": ["hello@acmecoffee.com"],
            "website": "https://acmecoffee.com"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/111/posts"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": [
                { "message": "Wholesale? orders@acmecoffee.com or 803.555.0199" },
                { "story": "Acme Coffee updated their hours." }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/111/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": [ { "name": "page_impressions", "period": "day", "values": [] } ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/222"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "id": "222",
            "name": "Acme Outlet"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/222/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": []
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v19.0/222/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "data": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = collect_all_pages(&client, 5).await;

    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.page_id, "111");
    assert_eq!(first.username.as_deref(), Some("acmecoffee"));
    assert_eq!(first.official_phone.as_deref(), Some("(803) 555-0101"));
    assert_eq!(
        first.official_emails.as_deref(),
        Some(&["hello@acmecoffee.com".to_string()][..])
    );
    assert_eq!(first.emails_from_posts, vec!["orders@acmecoffee.com"]);
    assert_eq!(first.phones_from_posts, vec!["8035550199"]);
    let insights = first.insights.as_ref().expect("insights should be present");
    assert_eq!(insights.as_array().map(Vec::len), Some(1));

    let second = &records[1];
    assert_eq!(second.page_id, "222");
    assert!(second.username.is_none());
    assert!(second.official_phone.is_none());
    assert!(second.emails_from_posts.is_empty());
    assert_eq!(
        second
            .insights
            .as_ref()
            .and_then(serde_json::Value::as_array)
            .map(Vec::len),
        Some(0)
    );
}

#[tokio::test]
async fn discovery_error_collects_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/me/accounts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&serde_json::json!({
            "error": {
                "message": "Invalid OAuth access token.",
                "type": "OAuthException",
                "code": 190
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = collect_all_pages(&client, 10).await;

    assert!(records.is_empty());
}
