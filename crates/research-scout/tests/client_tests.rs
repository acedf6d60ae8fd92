//! Portal client tests against a mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_scout::client::PortalClient;
use research_scout::config::Config;
use research_scout::error::ClientError;
use research_scout::resolve::{ProbeMethod, Prober};

fn client_for(server: &MockServer) -> PortalClient {
    PortalClient::new(&Config::for_testing(&server.uri())).unwrap()
}

// =============================================================================
// Page Fetch Tests
// =============================================================================

#[tokio::test]
async fn test_get_html_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let body = client_for(&server).get_html(&format!("{}/page", server.uri())).await.unwrap();
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_get_html_maps_statuses() {
    let server = MockServer::start().await;
    Mock::given(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.get_html(&format!("{}/missing", server.uri())).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));

    let err = client.get_html(&format!("{}/broken", server.uri())).await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 500, .. }));

    let err = client.get_html(&format!("{}/gone", server.uri())).await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedStatus { status: 410, .. }));
    assert!(err.is_http_status());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = PortalClient::new(&Config::for_testing("http://127.0.0.1:1")).unwrap();

    let err = client.get_html("http://127.0.0.1:1/page").await.unwrap_err();
    assert!(!err.is_http_status(), "expected a transport error, got {err:?}");
}

// =============================================================================
// Probe Tests
// =============================================================================

#[tokio::test]
async fn test_head_probe_requires_200() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/web/person/jane-doe-0/en"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/web/person/created/en"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let hit = client
        .probe(&format!("{}/web/person/jane-doe-0/en", server.uri()), ProbeMethod::Head)
        .await
        .unwrap();
    assert!(hit.is_none(), "HEAD probes carry no body");

    let not_ok = client
        .probe(&format!("{}/web/person/created/en", server.uri()), ProbeMethod::Head)
        .await;
    assert!(not_ok.is_err(), "only 200 counts as resolved");
}

#[tokio::test]
async fn test_head_probe_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client_for(&server).head(&format!("{}/old", server.uri())).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_probe_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/person/jane-doe/en"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>profile</html>"))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .probe(&format!("{}/web/person/jane-doe/en", server.uri()), ProbeMethod::Get)
        .await
        .unwrap();
    assert_eq!(body.as_deref(), Some("<html>profile</html>"));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    assert!(PortalClient::new(&Config::default()).is_ok());
}

#[test]
fn test_client_debug_shows_timeouts() {
    let client = PortalClient::new(&Config::default()).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("probe_timeout"));
}
