use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::io::{self, Read};

use crate::util::{load_config, save_config, client_config, sym_check, sym_cross, sym_question, color_enabled_stdout};
use dialpad::credentials::API_KEY_ENV;
use dialpad::{ApiKey, DialpadClient};
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

/// Fetch the company behind a key; doubles as a validity check.
fn fetch_company(key: &ApiKey) -> Result<Value> {
    let client = DialpadClient::new(client_config(None)?, key.clone())?;
    let reply = client.call("company_get", &Map::new())?;
    Ok(reply.into_value())
}

fn print_company(ce: bool, company: &Value) {
    if let Some(name) = company.get("name").and_then(|v| v.as_str()) {
        println!("{} Company: {}", sym_check(ce), name);
    }
    if let Some(domain) = company.get("domain").and_then(|v| v.as_str()) {
        println!("{} Domain: {}", sym_check(ce), domain);
    }
}

pub fn handle_auth(unset: bool) -> Result<()> {
    let ce = color_enabled_stdout();
    if unset {
        let mut cfg = load_config().unwrap_or_default();
        cfg.api_key = None;
        save_config(&cfg)?;
        println!("{} Removed stored API key.", sym_check(ce));
        return Ok(());
    }

    // Existing key: show it masked and check it still works
    if let Ok(cfg) = load_config() {
        if let Some(existing) = cfg.api_key.as_deref().and_then(|k| ApiKey::new(k).ok()) {
            println!("{} API key: {}", sym_check(ce), existing.masked().blue().bold());
            match fetch_company(&existing) {
                Ok(company) => {
                    print_company(ce, &company);
                    return Ok(());
                }
                Err(e) => {
                    println!("{} Stored key was rejected ({}). Please enter a new key.", sym_question(ce), e);
                }
            }
        }
    }

    println!("Enter your Dialpad API key (or set {}):", API_KEY_ENV);
    let raw = match rpassword::read_password() {
        Ok(k) if !k.trim().is_empty() => k,
        _ => {
            if let Ok(k) = env::var(API_KEY_ENV) { k } else {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).context("Failed to read API key from stdin")?;
                buf
            }
        }
    };
    if raw.trim().is_empty() {
        bail!("API key cannot be empty");
    }
    let key = ApiKey::new(raw.as_str())?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} Verifying key...")?);
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    let verified = fetch_company(&key);
    pb.finish_and_clear();

    let mut cfg = load_config().unwrap_or_default();
    cfg.api_key = Some(raw.trim().to_string());
    save_config(&cfg)?;
    println!("{} API key saved: {}", sym_check(ce), key.masked().blue().bold());

    match verified {
        Ok(company) => print_company(ce, &company),
        Err(e) => println!("{} Could not verify the key: {}", sym_cross(ce), e),
    }
    Ok(())
}
