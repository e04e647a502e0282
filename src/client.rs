use std::sync::Arc;

use reqwest::header::HeaderMap;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};
use url::Url;

use crate::common::network::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{DialpadError, Result};
use crate::params::ParamBag;
use crate::registry::{self, Location, Operation, Segment, Verb};

/// Decoded result of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    /// 2xx with a body that is not JSON.
    Text(String),
    /// 2xx with no body at all.
    Empty { status: u16 },
}

impl Reply {
    fn from_response(response: ApiResponse) -> Self {
        if response.body.trim().is_empty() {
            return Reply::Empty { status: response.status };
        }
        match serde_json::from_str(&response.body) {
            Ok(value) => Reply::Json(value),
            Err(_) => Reply::Text(response.body),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Reply::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Flatten into a JSON value for hosts that only speak JSON.
    pub fn into_value(self) -> Value {
        match self {
            Reply::Json(v) => v,
            Reply::Text(text) => json!({ "text": text }),
            Reply::Empty { status } => json!({ "success": true, "status": status }),
        }
    }
}

/// Request builder and dispatcher for the Dialpad API.
///
/// Stateless between calls: every call builds one request, sends it once and
/// returns. Safe to share across threads.
pub struct DialpadClient<T = HttpTransport> {
    config: ClientConfig,
    credentials: Arc<dyn Credentials>,
    transport: T,
}

impl DialpadClient<HttpTransport> {
    pub fn new(config: ClientConfig, credentials: impl Credentials + 'static) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, credentials, transport))
    }
}

impl<T: Transport> DialpadClient<T> {
    pub fn with_transport(config: ClientConfig, credentials: impl Credentials + 'static, transport: T) -> Self {
        Self {
            config,
            credentials: Arc::new(credentials),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invoke an operation by its registry name.
    pub fn call(&self, name: &str, args: &Map<String, Value>) -> Result<Reply> {
        let op = registry::lookup(name)?;
        self.execute(op, args)
    }

    /// Validate `args` against `op`, then send one request.
    ///
    /// Unknown names and absent required values fail before any I/O.
    pub fn execute(&self, op: &Operation, args: &Map<String, Value>) -> Result<Reply> {
        if let Some(unknown) = args.keys().find(|k| op.param(k).is_none()) {
            return Err(op.invalid(unknown, "not accepted by this operation"));
        }
        for p in op.params.iter().filter(|p| p.required) {
            if args.get(p.name).is_none_or(Value::is_null) {
                return Err(op.missing(p.name));
            }
        }

        let url = self.endpoint(op, args)?;
        let query: ParamBag = op
            .params_in(Location::Query)
            .map(|p| (p.name, args.get(p.name).cloned()))
            .collect();
        let body = op.sends_body().then(|| {
            op.params_in(Location::Body)
                .map(|p| (p.name, args.get(p.name).cloned()))
                .collect::<ParamBag>()
        });
        self.send(op.name, op.verb, url, query, body)
    }

    /// Send a request for an already substituted `path`, outside the registry.
    pub fn dispatch(&self, verb: Verb, path: &str, query: ParamBag, body: Option<ParamBag>) -> Result<Reply> {
        let mut url = self.config.base_url.clone();
        extend_path(&mut url, path.split('/').filter(|s| !s.is_empty()))?;
        self.send(path, verb, url, query, body)
    }

    fn endpoint(&self, op: &Operation, args: &Map<String, Value>) -> Result<Url> {
        let mut segments = Vec::new();
        for segment in op.segments() {
            match segment {
                Segment::Literal(text) => segments.push(text.to_string()),
                Segment::Placeholder(name) => {
                    let text = match args.get(name) {
                        Some(Value::String(s)) if s == "." || s == ".." => {
                            return Err(op.invalid(name, "must not be a dot segment"));
                        }
                        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
                        Some(Value::String(_)) => return Err(op.invalid(name, "must not be empty")),
                        Some(Value::Number(n)) => n.to_string(),
                        None | Some(Value::Null) => return Err(op.missing(name)),
                        Some(_) => return Err(op.invalid(name, "must be a string or a number")),
                    };
                    segments.push(text);
                }
            }
        }
        let mut url = self.config.base_url.clone();
        extend_path(&mut url, segments.iter().map(String::as_str))?;
        Ok(url)
    }

    fn send(&self, operation: &str, verb: Verb, mut url: Url, query: ParamBag, body: Option<ParamBag>) -> Result<Reply> {
        let pairs = query.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(&pairs);
        }
        let mut headers = HeaderMap::new();
        self.credentials.apply(&mut headers)?;
        let body = body.map(|b| Value::Object(b.into_json()));

        debug!(operation, %verb, %url, "dispatching request");
        let response = self.transport.send(ApiRequest { verb, url, headers, body })?;
        if !response.is_success() {
            warn!(operation, status = response.status, "request failed");
            return Err(DialpadError::Api {
                status: response.status,
                body: response.body,
            });
        }
        debug!(operation, status = response.status, "request succeeded");
        Ok(Reply::from_response(response))
    }
}

/// Append segments to the base URL's path, percent-encoding each one.
fn extend_path<'a>(url: &mut Url, segments: impl Iterator<Item = &'a str>) -> Result<()> {
    let base = url.to_string();
    let mut path = url
        .path_segments_mut()
        .map_err(|_| DialpadError::Config(format!("base url '{base}' cannot carry a path")))?;
    path.pop_if_empty().extend(segments);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{ApiKey, NoCredentials};
    use pretty_assertions::assert_eq;
    use reqwest::header::AUTHORIZATION;
    use std::sync::Mutex;

    struct Recorder {
        requests: Mutex<Vec<ApiRequest>>,
        status: u16,
        body: String,
    }

    impl Recorder {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                status,
                body: body.to_string(),
            }
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for Recorder {
        fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(ApiResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn client(status: u16, body: &str) -> DialpadClient<Recorder> {
        DialpadClient::with_transport(
            ClientConfig::default(),
            ApiKey::new("test-key").unwrap(),
            Recorder::answering(status, body),
        )
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn create_user_sends_only_supplied_fields() {
        let c = client(200, r#"{"id": "1"}"#);
        c.call(
            "users_create",
            &args(json!({"email": "a@example.com", "first_name": "Ada", "office_id": null})),
        )
        .unwrap();

        let sent = c.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].verb, Verb::Post);
        assert_eq!(sent[0].url.as_str(), "https://dialpad.com/api/v2/users");
        assert_eq!(sent[0].body, Some(json!({"email": "a@example.com", "first_name": "Ada"})));
    }

    #[test]
    fn missing_path_parameter_never_reaches_the_network() {
        let c = client(200, "{}");
        let err = c.call("contacts_get", &args(json!({"id": null}))).unwrap_err();
        assert!(matches!(
            err,
            DialpadError::MissingParameter { ref operation, ref name } if operation == "contacts_get" && name == "id"
        ));
        assert!(err.is_validation());

        let err = c.call("contacts_get", &Map::new()).unwrap_err();
        assert!(matches!(err, DialpadError::MissingParameter { .. }));
        assert!(c.transport().requests().is_empty());
    }

    #[test]
    fn missing_required_query_parameter_is_rejected() {
        let c = client(200, "{}");
        let err = c.call("company_sms_opt_out", &args(json!({"id": "7"}))).unwrap_err();
        assert!(matches!(err, DialpadError::MissingParameter { ref name, .. } if name == "opt_out_state"));
        assert!(c.transport().requests().is_empty());
    }

    #[test]
    fn list_offices_passes_cursor_through() {
        let c = client(200, r#"{"items": []}"#);
        c.call("offices_list", &args(json!({"cursor": "abc"}))).unwrap();

        let sent = c.transport().requests();
        assert_eq!(sent[0].verb, Verb::Get);
        assert_eq!(sent[0].url.path(), "/api/v2/offices");
        assert_eq!(sent[0].url.query(), Some("cursor=abc"));
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn list_without_filters_has_no_query_string() {
        let c = client(200, r#"{"items": []}"#);
        c.call("webhooks_list", &Map::new()).unwrap();
        assert_eq!(c.transport().requests()[0].url.as_str(), "https://dialpad.com/api/v2/webhooks");
    }

    #[test]
    fn json_success_body_is_returned_unchanged() {
        let fixture = json!({"items": [{"id": "42", "name": "HQ", "state": "active"}], "cursor": "next"});
        let c = client(200, &fixture.to_string());
        let reply = c.call("offices_list", &Map::new()).unwrap();
        assert_eq!(reply, Reply::Json(fixture));
    }

    #[test]
    fn non_success_status_becomes_api_error() {
        let c = client(404, r#"{"error":"not_found"}"#);
        let err = c.call("users_get", &args(json!({"id": "99"}))).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body_json(), Some(json!({"error": "not_found"})));
        assert!(matches!(err, DialpadError::Api { ref body, .. } if body == r#"{"error":"not_found"}"#));
        assert!(!err.is_validation());
    }

    #[test]
    fn empty_success_body_is_a_marker() {
        let c = client(204, "");
        let reply = c.call("webhooks_delete", &args(json!({"id": 12}))).unwrap();
        assert_eq!(reply, Reply::Empty { status: 204 });
        assert_eq!(reply.into_value(), json!({"success": true, "status": 204}));
        assert_eq!(c.transport().requests()[0].url.path(), "/api/v2/webhooks/12");
    }

    #[test]
    fn non_json_success_body_is_text() {
        let c = client(200, "OK");
        let reply = c.call("oauth2_deauthorize_post", &Map::new()).unwrap();
        assert_eq!(reply, Reply::Text("OK".to_string()));
    }

    #[test]
    fn credentials_are_attached() {
        let c = client(200, "{}");
        c.call("company_get", &Map::new()).unwrap();
        assert_eq!(c.transport().requests()[0].headers[AUTHORIZATION], "Bearer test-key");

        let anon = DialpadClient::with_transport(ClientConfig::default(), NoCredentials, Recorder::answering(200, "{}"));
        anon.call("company_get", &Map::new()).unwrap();
        assert!(anon.transport().requests()[0].headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn write_without_fields_sends_empty_object() {
        let c = client(200, "{}");
        c.call("call_actions_hangup", &args(json!({"id": "55"}))).unwrap();
        let sent = c.transport().requests();
        assert_eq!(sent[0].verb, Verb::Put);
        assert_eq!(sent[0].body, Some(json!({})));
    }

    #[test]
    fn delete_with_declared_fields_sends_body() {
        let c = client(200, "{}");
        c.call("callcenters_operators_delete", &args(json!({"id": "3", "user_id": 8}))).unwrap();
        c.call("contacts_delete", &args(json!({"id": "4"}))).unwrap();

        let sent = c.transport().requests();
        assert_eq!(sent[0].verb, Verb::Delete);
        assert_eq!(sent[0].body, Some(json!({"user_id": 8})));
        assert_eq!(sent[1].body, None);
    }

    #[test]
    fn path_segments_are_encoded() {
        let c = client(200, "{}");
        c.call("blockednumbers_get", &args(json!({"number": "+1 555 0100"}))).unwrap();
        assert_eq!(c.transport().requests()[0].url.path(), "/api/v2/blockednumbers/+1%20555%200100");
    }

    #[test]
    fn dot_segment_path_values_are_rejected() {
        let c = client(200, "{}");
        let cases = [
            ("webhooks_delete", json!({"id": ".."})),
            ("users_get", json!({"id": "."})),
            ("deskphones_users_get", json!({"parent_id": "5", "id": ".."})),
        ];
        for (name, a) in cases {
            let err = c.call(name, &args(a)).unwrap_err();
            assert!(
                matches!(err, DialpadError::InvalidParameter { ref name, .. } if name == "id"),
                "{err}"
            );
        }
        assert!(c.transport().requests().is_empty());

        c.call("users_get", &args(json!({"id": "..5"}))).unwrap();
        assert_eq!(c.transport().requests()[0].url.path(), "/api/v2/users/..5");
    }

    #[test]
    fn every_operation_checks_required_params_before_sending() {
        for op in registry::all() {
            let required: Vec<&str> = op.params.iter().filter(|p| p.required).map(|p| p.name).collect();
            for missing in &required {
                let c = client(200, "{}");
                let mut a = Map::new();
                for name in required.iter().filter(|n| *n != missing) {
                    a.insert(name.to_string(), json!("1"));
                }
                let err = c.execute(op, &a).unwrap_err();
                assert!(
                    matches!(err, DialpadError::MissingParameter { ref name, .. } if name == missing),
                    "{}: {err}",
                    op.name
                );

                a.insert(missing.to_string(), Value::Null);
                assert!(matches!(c.execute(op, &a), Err(DialpadError::MissingParameter { .. })), "{}", op.name);
                assert!(c.transport().requests().is_empty(), "{} sent a request", op.name);
            }
        }
    }

    #[test]
    fn every_operation_drops_unset_optional_params() {
        for op in registry::all() {
            let c = client(200, "{}");
            let a: Map<String, Value> = op
                .params
                .iter()
                .map(|p| (p.name.to_string(), if p.required { json!("1") } else { Value::Null }))
                .collect();
            c.execute(op, &a).unwrap();

            let sent = c.transport().requests();
            assert_eq!(sent.len(), 1, "{}", op.name);
            assert_eq!(sent[0].verb, op.verb);
            let query: Vec<(String, String)> = sent[0].url.query_pairs().into_owned().collect();
            let expected_query: Vec<(String, String)> = op
                .params_in(Location::Query)
                .filter(|p| p.required)
                .map(|p| (p.name.to_string(), "1".to_string()))
                .collect();
            assert_eq!(query, expected_query, "{}", op.name);

            let expected_body = op.sends_body().then(|| json!({}));
            assert_eq!(sent[0].body, expected_body, "{}", op.name);
            if op.verb.requires_body() {
                assert_eq!(sent[0].body, Some(json!({})), "{}", op.name);
            }
        }
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let c = client(200, "{}");
        let err = c.call("offices_list", &args(json!({"page": 2}))).unwrap_err();
        assert!(matches!(err, DialpadError::InvalidParameter { ref name, .. } if name == "page"));
        assert!(c.transport().requests().is_empty());
    }

    #[test]
    fn structured_path_value_is_rejected() {
        let c = client(200, "{}");
        let err = c.call("users_get", &args(json!({"id": ["1"]}))).unwrap_err();
        assert!(matches!(err, DialpadError::InvalidParameter { .. }));
    }

    #[test]
    fn base_url_prefix_is_kept() {
        let config = ClientConfig::default().with_base_url("https://proxy.internal/dialpad/").unwrap();
        let c = DialpadClient::with_transport(config, NoCredentials, Recorder::answering(200, "{}"));
        c.call("users_get", &args(json!({"id": "1"}))).unwrap();
        assert_eq!(
            c.transport().requests()[0].url.as_str(),
            "https://proxy.internal/dialpad/api/v2/users/1"
        );
    }

    #[test]
    fn dispatch_builds_request_from_parts() {
        let c = client(200, "{}");
        let query = ParamBag::new().with("cursor", Some("xyz")).with::<bool>("state", None);
        let body = ParamBag::new().with("name", Some("Support")).with::<i64>("office_id", None);
        c.dispatch(Verb::Patch, "/api/v2/rooms/9", query, Some(body)).unwrap();

        let sent = c.transport().requests();
        assert_eq!(sent[0].url.as_str(), "https://dialpad.com/api/v2/rooms/9?cursor=xyz");
        assert_eq!(sent[0].body, Some(json!({"name": "Support"})));
    }
}
