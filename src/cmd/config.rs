use anyhow::Result;
use clap::Args;
use crate::util::{load_config, save_config, config_path, Config, BASE_URL_ENV};
use dialpad::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use dialpad::ClientConfig;

#[derive(Args)]
pub struct ConfigCmd {
    /// Show current settings
    #[arg(long)]
    pub show: bool,

    /// Set the API origin (e.g., https://sandbox.dialpad.com)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Set the HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Forget the stored base URL and timeout
    #[arg(long)]
    pub reset: bool,
}

pub fn handle_config(cmd: ConfigCmd) -> Result<()> {
    let mut cfg: Config = load_config().unwrap_or_default();

    if cmd.reset {
        cfg.base_url = None;
        cfg.timeout_secs = None;
        save_config(&cfg)?;
        println!("Reset base_url and timeout to defaults.");
        return Ok(());
    }

    let show_mode = cmd.show || (cmd.base_url.is_none() && cmd.timeout.is_none());
    if show_mode {
        if let Some(path) = config_path() {
            println!("Config_file: {}", path.display());
        }
        println!("Base_url: {}", cfg.base_url.as_deref().unwrap_or(&format!("(unset, default {})", DEFAULT_BASE_URL)));
        if let Ok(env_base) = std::env::var(BASE_URL_ENV) {
            println!("Base_url_env: {} (overrides stored value)", env_base);
        }
        match cfg.timeout_secs {
            Some(s) => println!("Timeout_secs: {}", s),
            None => println!("Timeout_secs: (unset, default {})", DEFAULT_TIMEOUT_SECS),
        }
        println!("Api_key: {}", if cfg.api_key.is_some() { "stored" } else { "(not stored)" });
        return Ok(());
    }

    if let Some(url) = cmd.base_url.as_deref() {
        let u = url.trim();
        if u.is_empty() { anyhow::bail!("base_url cannot be empty"); }
        // Reject anything the client could not use
        ClientConfig::default().with_base_url(u)?;
        cfg.base_url = Some(u.to_string());
    }

    if let Some(secs) = cmd.timeout {
        if secs == 0 { anyhow::bail!("timeout must be at least 1 second"); }
        cfg.timeout_secs = Some(secs);
    }

    save_config(&cfg)?;
    println!("Saved settings.");
    Ok(())
}
