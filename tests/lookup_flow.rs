use std::time::Duration;

use einline::{LookupTemplate, Severity, TriggerOutcome};
use reqwest::Url;
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{controller_for, dead_server_uri, interpolated_controller};

#[tokio::test]
async fn blank_identifiers_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    for raw in ["", "   ", "\t", " \n "] {
        let outcome = controller.trigger(raw, Some("key"));
        assert!(matches!(outcome, TriggerOutcome::Rejected(_)));
        assert_eq!(controller.banner().message(), "Please enter an EIN.");
        assert_eq!(controller.banner().severity(), Some(Severity::Error));
        assert_eq!(controller.display().text(), "");
    }
    controller.settle_all().await;

    server.verify().await;
}

#[tokio::test]
async fn success_renders_pretty_body_and_success_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizations/12-3456789"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Acme"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger(" 12-3456789 ", None);
    controller.settle_all().await;

    assert_eq!(controller.display().text(), "{\n  \"name\": \"Acme\"\n}");
    assert!(controller.banner().is_visible());
    assert_eq!(controller.banner().severity(), Some(Severity::Success));
    assert_eq!(
        controller.banner().message(),
        "Organization data fetched successfully!"
    );

    server.verify().await;
}

#[tokio::test]
async fn credential_is_sent_as_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizations/1"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger("1", Some("  abc123  "));
    controller.settle_all().await;

    assert_eq!(controller.banner().severity(), Some(Severity::Success));
    server.verify().await;
}

#[tokio::test]
async fn missing_or_blank_credential_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger("1", None);
    controller.trigger("2", Some("   "));
    controller.settle_all().await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert!(request.headers.get("authorization").is_none());
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/json"
        );
    }
}

#[tokio::test]
async fn not_found_embeds_status_and_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizations/00-0000000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger("00-0000000", None);
    controller.settle_all().await;

    assert_eq!(controller.display().text(), "Error fetching data.");
    assert_eq!(controller.banner().severity(), Some(Severity::Error));
    let message = controller.banner().message();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("not found"), "{message}");
    assert_eq!(
        message,
        "Failed to lookup organization: HTTP error! Status: 404. Details: not found"
    );
}

#[tokio::test]
async fn error_without_json_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger("1", None);
    controller.settle_all().await;

    assert_eq!(
        controller.banner().message(),
        "Failed to lookup organization: HTTP error! Status: 500. Details: Internal Server Error"
    );
}

#[tokio::test]
async fn invalid_json_on_success_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger("1", None);
    controller.settle_all().await;

    assert_eq!(controller.display().text(), "Error fetching data.");
    assert_eq!(controller.banner().severity(), Some(Severity::Error));
    assert!(controller
        .banner()
        .message()
        .contains("error decoding response body"));
    assert!(!controller.banner().message().contains("Status:"));
}

#[tokio::test]
async fn network_failure_is_surfaced_not_raised() {
    let base = Url::parse(&format!("{}/api/organizations", dead_server_uri())).unwrap();
    let mut controller = controller_for(LookupTemplate::Interpolated { base });

    controller.trigger("12-3456789", None);
    controller.settle_all().await;

    assert_eq!(controller.display().text(), "Error fetching data.");
    assert_eq!(controller.banner().severity(), Some(Severity::Error));
    let message = controller.banner().message();
    assert!(
        message.starts_with("Failed to lookup organization: error sending request"),
        "{message}"
    );

    // Still usable afterwards
    controller.trigger("", None);
    assert_eq!(controller.banner().message(), "Please enter an EIN.");
}

#[tokio::test]
async fn same_response_renders_identically_each_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ein": "12-3456789", "name": "Acme", "tags": [1, 2]})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);

    controller.trigger("12-3456789", None);
    controller.settle_all().await;
    let first = controller.display().text().to_string();

    controller.trigger("12-3456789", None);
    assert!(controller.display().is_loading());
    controller.settle_all().await;
    let second = controller.display().text().to_string();

    assert_eq!(first, second);
    server.verify().await;
}

#[tokio::test]
async fn overlapping_cycles_are_last_write_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizations/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "Slow"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/organizations/fast"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "gone"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = interpolated_controller(&server);
    controller.trigger("slow", None);
    controller.trigger("fast", None);
    assert_eq!(controller.in_flight(), 2);

    // The fast failure lands first and is then overwritten by the slow success
    let first = controller.settle_next().await;
    assert_eq!(first, Some(2));
    assert_eq!(controller.banner().severity(), Some(Severity::Error));

    let second = controller.settle_next().await;
    assert_eq!(second, Some(1));
    assert_eq!(controller.display().text(), "{\n  \"name\": \"Slow\"\n}");
    assert_eq!(controller.banner().severity(), Some(Severity::Success));

    server.verify().await;
}

#[tokio::test]
async fn fixed_endpoint_needs_no_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/v1/status", server.uri())).unwrap();
    let mut controller = controller_for(LookupTemplate::Fixed { url });
    let outcome = controller.trigger("", None);
    assert!(matches!(outcome, TriggerOutcome::Dispatched { .. }));
    controller.settle_all().await;

    assert_eq!(controller.display().text(), "{\n  \"status\": \"ok\"\n}");
    server.verify().await;
}
