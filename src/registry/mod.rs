//! Static directory of every Dialpad operation.
//!
//! Each [`Operation`] describes one endpoint: verb, path template, and the
//! parameters it accepts. The host framework discovers tools through [`all`]
//! and dispatches them by name through [`find`].

mod access;
mod callcenters;
mod calls;
mod events;
mod numbers;
mod offices;
mod routing;
mod users;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value, json};

use crate::error::{DialpadError, Result};

const GROUPS: &[&[Operation]] = &[
    access::OPERATIONS,
    calls::OPERATIONS,
    callcenters::OPERATIONS,
    numbers::OPERATIONS,
    offices::OPERATIONS,
    routing::OPERATIONS,
    users::OPERATIONS,
    events::OPERATIONS,
];

static BY_NAME: Lazy<HashMap<&'static str, &'static Operation>> =
    Lazy::new(|| all().map(|op| (op.name, op)).collect());

/// Every operation, grouped by API area.
pub fn all() -> impl Iterator<Item = &'static Operation> {
    GROUPS.iter().flat_map(|group| group.iter())
}

pub fn find(name: &str) -> Option<&'static Operation> {
    BY_NAME.get(name).copied()
}

/// Like [`find`], failing with [`DialpadError::UnknownOperation`].
pub fn lookup(name: &str) -> Result<&'static Operation> {
    find(name).ok_or_else(|| DialpadError::UnknownOperation(name.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    pub fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }

    /// Verbs that always send a JSON body, even an empty one.
    pub fn requires_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Patch | Verb::Put)
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Boolean,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub location: Location,
    pub kind: Kind,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    /// A placeholder segment of the path template. Always required.
    pub const fn path(name: &'static str, kind: Kind, description: &'static str) -> Self {
        Self { name, location: Location::Path, kind, required: true, description }
    }

    pub const fn query(name: &'static str, kind: Kind, description: &'static str) -> Self {
        Self { name, location: Location::Query, kind, required: false, description }
    }

    pub const fn required_query(name: &'static str, kind: Kind, description: &'static str) -> Self {
        Self { name, location: Location::Query, kind, required: true, description }
    }

    pub const fn body(name: &'static str, kind: Kind, description: &'static str) -> Self {
        Self { name, location: Location::Body, kind, required: false, description }
    }

    /// Interpret a command-line string according to the declared kind.
    ///
    /// Arrays accept JSON or a comma-separated list of strings.
    pub fn coerce(&self, raw: &str) -> std::result::Result<Value, String> {
        match self.kind {
            Kind::String => Ok(Value::String(raw.to_string())),
            Kind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| format!("expected an integer, got '{raw}': {e}")),
            Kind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Value::Bool(true)),
                "false" | "no" | "0" => Ok(Value::Bool(false)),
                _ => Err(format!("expected true or false, got '{raw}'")),
            },
            Kind::Array => match serde_json::from_str::<Value>(raw) {
                Ok(v @ Value::Array(_)) => Ok(v),
                _ => Ok(Value::Array(
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| Value::String(s.to_string()))
                        .collect(),
                )),
            },
            Kind::Object => match serde_json::from_str::<Value>(raw) {
                Ok(v @ Value::Object(_)) => Ok(v),
                _ => Err(format!("expected a JSON object, got '{raw}'")),
            },
        }
    }
}

#[derive(Debug)]
pub struct Operation {
    pub name: &'static str,
    pub verb: Verb,
    pub path: &'static str,
    pub tag: &'static str,
    /// Surfaced first by hosts that show a reduced tool set.
    pub important: bool,
    pub summary: &'static str,
    pub params: &'static [Param],
}

impl Operation {
    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn params_in(&self, location: Location) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// Whether the request carries a JSON body.
    ///
    /// DELETE sends one only when the endpoint declares body fields.
    pub fn sends_body(&self) -> bool {
        self.verb.requires_body() || self.params_in(Location::Body).next().is_some()
    }

    /// JSON schema of the operation's inputs, as tool-calling hosts expect it.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for p in self.params {
            properties.insert(
                p.name.to_string(),
                json!({ "type": p.kind.as_str(), "description": p.description }),
            );
        }
        let required: Vec<&str> = self.params.iter().filter(|p| p.required).map(|p| p.name).collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Tool definition: name, description and input schema.
    pub fn tool_definition(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.summary,
            "tags": [self.tag],
            "important": self.important,
            "input_schema": self.input_schema(),
        })
    }

    /// Path template split into literal and placeholder segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'static>> {
        let path: &'static str = self.path;
        path.split('/').filter(|s| !s.is_empty()).map(|s| {
            match s.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
                Some(name) => Segment::Placeholder(name),
                None => Segment::Literal(s),
            }
        })
    }

    pub(crate) fn missing(&self, name: &str) -> DialpadError {
        DialpadError::MissingParameter {
            operation: self.name.to_string(),
            name: name.to_string(),
        }
    }

    pub(crate) fn invalid(&self, name: &str, reason: impl Into<String>) -> DialpadError {
        DialpadError::InvalidParameter {
            operation: self.name.to_string(),
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for op in all() {
            assert!(seen.insert(op.name), "duplicate operation {}", op.name);
        }
        assert_eq!(seen.len(), 191);
    }

    #[test]
    fn placeholders_match_path_params() {
        for op in all() {
            let placeholders: Vec<&str> = op
                .segments()
                .filter_map(|s| match s {
                    Segment::Placeholder(n) => Some(n),
                    Segment::Literal(_) => None,
                })
                .collect();
            let declared: Vec<&str> = op.params_in(Location::Path).map(|p| p.name).collect();
            let mut a = placeholders.clone();
            let mut b = declared.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b, "{} path params", op.name);
            assert!(op.params_in(Location::Path).all(|p| p.required));
        }
    }

    #[test]
    fn parameter_names_are_unique_per_operation() {
        for op in all() {
            let mut seen = HashSet::new();
            for p in op.params {
                assert!(seen.insert(p.name), "{} declares {} twice", op.name, p.name);
            }
        }
    }

    #[test]
    fn get_never_declares_body_fields() {
        for op in all().filter(|op| op.verb == Verb::Get) {
            assert!(op.params_in(Location::Body).next().is_none(), "{}", op.name);
            assert!(!op.sends_body(), "{}", op.name);
        }
    }

    #[test]
    fn offices_list_takes_only_pagination_filters() {
        let op = lookup("offices_list").unwrap();
        assert_eq!(op.verb, Verb::Get);
        assert_eq!(op.path, "/api/v2/offices");
        let names: Vec<&str> = op.params.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["cursor", "active_only"]);
    }

    #[test]
    fn unknown_operation_is_reported() {
        let err = lookup("users_teleport").unwrap_err();
        assert!(matches!(err, DialpadError::UnknownOperation(ref n) if n == "users_teleport"));
        assert!(err.is_validation());
    }

    #[test]
    fn input_schema_lists_required_params() {
        let op = lookup("company_sms_opt_out").unwrap();
        let schema = op.input_schema();
        assert_eq!(schema["required"], json!(["id", "opt_out_state"]));
        assert_eq!(schema["properties"]["cursor"]["type"], json!("string"));
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn coerce_follows_declared_kind() {
        let int = Param::query("limit", Kind::Integer, "");
        assert_eq!(int.coerce("42").unwrap(), json!(42));
        assert!(int.coerce("forty").is_err());

        let flag = Param::query("active_only", Kind::Boolean, "");
        assert_eq!(flag.coerce("TRUE").unwrap(), json!(true));
        assert!(flag.coerce("maybe").is_err());

        let list = Param::body("to_numbers", Kind::Array, "");
        assert_eq!(list.coerce("+15551234567, +15557654321").unwrap(), json!(["+15551234567", "+15557654321"]));
        assert_eq!(list.coerce("[1,2]").unwrap(), json!([1, 2]));

        let obj = Param::body("hold_queue", Kind::Object, "");
        assert_eq!(obj.coerce(r#"{"max_hold_count": 5}"#).unwrap(), json!({"max_hold_count": 5}));
        assert!(obj.coerce("nope").is_err());
    }

    #[test]
    fn important_operations_are_flagged() {
        let important: Vec<&str> = all().filter(|op| op.important).map(|op| op.name).collect();
        assert!(important.contains(&"users_delete"));
        assert!(important.len() < 10);
    }
}
