use dialpad::{ApiKey, ClientConfig, DialpadClient, DialpadError, Reply};
use serde_json::{Map, Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Run a blocking call off the async runtime driving the mock server.
async fn call(server: &MockServer, name: &'static str, a: Value) -> dialpad::Result<Reply> {
    let base = server.uri();
    tokio::task::spawn_blocking(move || {
        let config = ClientConfig::default().with_base_url(&base)?;
        let client = DialpadClient::new(config, ApiKey::new("live-test-key")?)?;
        client.call(name, &args(a))
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_sends_query_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/offices"))
        .and(query_param("cursor", "abc"))
        .and(header("authorization", "Bearer live-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "1"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = call(&server, "offices_list", json!({"cursor": "abc"})).await.unwrap();
    assert_eq!(reply, Reply::Json(json!({"items": [{"id": "1"}]})));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("cursor=abc"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn post_sends_filtered_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/users"))
        .and(body_json(json!({"email": "a@example.com", "first_name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "123", "email": "a@example.com"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = call(
        &server,
        "users_create",
        json!({"email": "a@example.com", "first_name": "Ada", "office_id": null}),
    )
    .await
    .unwrap();
    assert_eq!(reply.as_json().and_then(|v| v.get("id")), Some(&json!("123")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn not_found_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not_found"}"#))
        .mount(&server)
        .await;

    let err = call(&server, "contacts_get", json!({"id": "missing"})).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body_json(), Some(json!({"error": "not_found"})));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn no_content_is_an_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/webhooks/77"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let reply = call(&server, "webhooks_delete", json!({"id": "77"})).await.unwrap();
    assert_eq!(reply, Reply::Empty { status: 204 });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn validation_failure_sends_nothing() {
    let server = MockServer::start().await;

    let err = call(&server, "contacts_get", json!({})).await.unwrap_err();
    assert!(matches!(err, DialpadError::MissingParameter { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn unreachable_host_is_a_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default()
        .with_base_url(&format!("http://{addr}"))
        .unwrap()
        .with_timeout(std::time::Duration::from_secs(2));
    let client = DialpadClient::new(config, ApiKey::new("k").unwrap()).unwrap();
    let err = client.call("company_get", &Map::new()).unwrap_err();
    assert!(matches!(err, DialpadError::Transport(_)));
    assert!(!err.is_validation());
}
