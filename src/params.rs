//! Parameter bags and the absent-value filter shared by every operation.

use serde_json::{Map, Value};

/// Ordered mapping from parameter name to an optional value.
///
/// `None` and JSON `null` both mean "not supplied" and never reach the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamBag {
    entries: Vec<(String, Option<Value>)>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Option<Value>) {
        self.entries.push((name.into(), value));
    }

    /// Builder form of [`ParamBag::push`] for anything convertible into a JSON value.
    pub fn with<V: Into<Value>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push(name, value.map(Into::into));
        self
    }

    /// Entries whose value was supplied, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| match value {
                Some(v) if !v.is_null() => Some((name.as_str(), v)),
                _ => None,
            })
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Reduce to a JSON object holding only the supplied entries.
    pub fn into_json(self) -> Map<String, Value> {
        self.entries
            .into_iter()
            .filter_map(|(name, value)| value.filter(|v| !v.is_null()).map(|v| (name, v)))
            .collect()
    }

    /// Supplied entries flattened into query-string pairs.
    ///
    /// Arrays repeat the key once per element; objects are sent as JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (name, value) in self.present() {
            match value {
                Value::Array(items) => {
                    for item in items.iter().filter(|i| !i.is_null()) {
                        pairs.push((name.to_string(), query_text(item)));
                    }
                }
                other => pairs.push((name.to_string(), query_text(other))),
            }
        }
        pairs
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Value>)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (K, Option<Value>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Text form of a scalar for a URL; strings are used verbatim, never quoted.
pub fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_entries_are_dropped_from_json() {
        let bag = ParamBag::new()
            .with("email", Some("a@example.com"))
            .with("first_name", Some("Ada"))
            .with::<i64>("office_id", None)
            .with("license", Some(Value::Null));

        assert_eq!(
            Value::Object(bag.into_json()),
            json!({"email": "a@example.com", "first_name": "Ada"})
        );
    }

    #[test]
    fn insertion_order_is_kept() {
        let bag: ParamBag = vec![
            ("zeta", Some(json!(1))),
            ("alpha", None),
            ("mid", Some(json!(true))),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = bag.present().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "mid"]);
    }

    #[test]
    fn query_pairs_flatten_scalars_and_arrays() {
        let bag = ParamBag::new()
            .with("cursor", Some("abc"))
            .with("active_only", Some(true))
            .with("limit", Some(25))
            .with("states", Some(json!(["active", null, "pending"])))
            .with::<String>("unused", None);

        assert_eq!(
            bag.query_pairs(),
            vec![
                ("cursor".to_string(), "abc".to_string()),
                ("active_only".to_string(), "true".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("states".to_string(), "active".to_string()),
                ("states".to_string(), "pending".to_string()),
            ]
        );
    }

    #[test]
    fn bag_with_only_absent_values_is_empty() {
        let bag = ParamBag::new()
            .with::<String>("cursor", None)
            .with("state", Some(Value::Null));
        assert!(bag.is_empty());
        assert!(bag.query_pairs().is_empty());
    }
}
