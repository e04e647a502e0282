use anyhow::{anyhow, bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};

use crate::util::{client_config, get_api_key_from_env_or_config};
use dialpad::credentials::API_KEY_ENV;
use dialpad::registry::{self, Operation};
use dialpad::{ApiKey, DialpadClient, DialpadError};

/// Merge `--args-json` and `--arg name=value` pairs into one argument map.
///
/// `name=value` strings are coerced by the parameter's declared kind and win
/// over the JSON object.
pub fn parse_args(op: &Operation, pairs: &[String], args_json: Option<&str>) -> Result<Map<String, Value>> {
    let mut args = match args_json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--args-json is not valid JSON")? {
            Value::Object(map) => map,
            _ => bail!("--args-json must be a JSON object"),
        },
        None => Map::new(),
    };
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", pair))?;
        let name = name.trim();
        let param = op.param(name).ok_or_else(|| {
            let known: Vec<&str> = op.params.iter().map(|p| p.name).collect();
            anyhow!("{} has no parameter '{}' (known: {})", op.name, name, known.join(", "))
        })?;
        let value = param.coerce(raw).map_err(|e| anyhow!("{}: {}", name, e))?;
        args.insert(name.to_string(), value);
    }
    Ok(args)
}

pub fn handle_call(operation: String, pairs: Vec<String>, args_json: Option<String>, base_url: Option<String>) -> Result<()> {
    let op = registry::lookup(&operation)?;
    let args = parse_args(op, &pairs, args_json.as_deref())?;

    let key = get_api_key_from_env_or_config()
        .ok_or_else(|| anyhow!("No API key found. Run `dialpad auth` or set {}.", API_KEY_ENV))?;
    let client = DialpadClient::new(client_config(base_url.as_deref())?, ApiKey::new(key)?)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    pb.set_message(format!("{} {}", op.verb, op.path));
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    let result = client.execute(op, &args);
    pb.finish_and_clear();

    match result {
        Ok(reply) => {
            println!("{}", serde_json::to_string_pretty(&reply.into_value())?);
            Ok(())
        }
        Err(DialpadError::Api { status, body }) => {
            let ce = crate::util::color_enabled_stdout();
            eprintln!("{} {} failed with status {}", crate::util::sym_cross(ce), op.name, status);
            match serde_json::from_str::<Value>(&body) {
                Ok(v) => eprintln!("{}", serde_json::to_string_pretty(&v)?),
                Err(_) => eprintln!("{}", body),
            }
            bail!("Dialpad API error {}", status)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn op(name: &str) -> &'static Operation {
        registry::lookup(name).unwrap()
    }

    #[test]
    fn pairs_are_coerced_by_kind() {
        let args = parse_args(
            op("users_create"),
            &["email=a@example.com".into(), "office_id=42".into(), "auto_assign=true".into()],
            None,
        )
        .unwrap();
        assert_eq!(
            Value::Object(args),
            json!({"email": "a@example.com", "office_id": 42, "auto_assign": true})
        );
    }

    #[test]
    fn pairs_override_json_object() {
        let args = parse_args(
            op("offices_list"),
            &["cursor=abc".into()],
            Some(r#"{"cursor": "old", "active_only": false}"#),
        )
        .unwrap();
        assert_eq!(Value::Object(args), json!({"cursor": "abc", "active_only": false}));
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let args = parse_args(op("offices_list"), &["cursor=a=b==".into()], None).unwrap();
        assert_eq!(args["cursor"], json!("a=b=="));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_args(op("offices_list"), &["cursor".into()], None).is_err());
        assert!(parse_args(op("offices_list"), &["page=2".into()], None).is_err());
        assert!(parse_args(op("offices_list"), &["active_only=maybe".into()], None).is_err());
        assert!(parse_args(op("offices_list"), &[], Some("[1, 2]")).is_err());
    }
}
