use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use std::time::Duration;

use dialpad::ClientConfig;
use dialpad::credentials::API_KEY_ENV;

const APP_NAME: &str = "dialpad";
pub const BASE_URL_ENV: &str = "DIALPAD_BASE_URL";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dialpad API key used as a bearer token
    pub api_key: Option<String>,
    /// Override for the API origin (default https://dialpad.com)
    #[serde(default)]
    pub base_url: Option<String>,
    /// HTTP timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

pub fn load_config() -> Result<Config> {
    let cfg: Config = confy::load(APP_NAME, None).context("failed to load config")?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    confy::store(APP_NAME, None, cfg).context("failed to save config")?;
    Ok(())
}

pub fn config_path() -> Option<std::path::PathBuf> {
    confy::get_configuration_file_path(APP_NAME, None).ok()
}

use supports_color::Stream;
use owo_colors::OwoColorize;

pub fn color_enabled_stdout() -> bool {
    supports_color::on(Stream::Stdout).is_some()
}

pub fn sym_check(enabled: bool) -> String {
    if enabled { format!("{}", "✔".green().bold()) } else { "✔".to_string() }
}

pub fn sym_cross(enabled: bool) -> String {
    if enabled { format!("{}", "✖".red().bold()) } else { "x".to_string() }
}

pub fn sym_question(enabled: bool) -> String {
    if enabled { format!("{}", "?".cyan().bold()) } else { "?".to_string() }
}

/// Resolve the Dialpad API key from environment or stored config
pub fn get_api_key_from_env_or_config() -> Option<String> {
    if let Ok(k) = std::env::var(API_KEY_ENV) {
        let k = k.trim().to_string();
        if !k.is_empty() { return Some(k); }
    }
    if let Ok(cfg) = load_config() {
        if let Some(k) = cfg.api_key.as_ref() {
            if !k.trim().is_empty() { return Some(k.trim().to_string()); }
        }
    }
    None
}

/// Build the client configuration: flag, then env, then stored config, then defaults.
pub fn client_config(base_url_flag: Option<&str>) -> Result<ClientConfig> {
    let cfg = load_config().unwrap_or_default();
    let base = base_url_flag
        .map(str::to_string)
        .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|s| !s.trim().is_empty()))
        .or(cfg.base_url);

    let mut client_cfg = ClientConfig::default();
    if let Some(base) = base {
        client_cfg = client_cfg
            .with_base_url(&base)
            .with_context(|| format!("invalid base url '{base}'"))?;
    }
    if let Some(secs) = cfg.timeout_secs.filter(|s| *s > 0) {
        client_cfg = client_cfg.with_timeout(Duration::from_secs(secs));
    }
    Ok(client_cfg)
}

/// Initialize stderr logging; `--debug` forces debug level, otherwise RUST_LOG or warn.
pub fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;
    let filter = if debug {
        EnvFilter::new("dialpad=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
