use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::Context;
use catalog_core::{notify::DEFAULT_NOTIFICATION_TTL, DEFAULT_API_BASE};

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub notification_ttl_secs: u64,
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            notification_ttl_secs: DEFAULT_NOTIFICATION_TTL.as_secs(),
            offline: false,
        }
    }
}

impl Settings {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }
}

/// Defaults, then the config file, then the process environment.
///
/// A missing file at the default location is fine; an explicitly named
/// file that cannot be read or parsed is an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                if let Err(err) = apply_file(&mut settings, &raw) {
                    tracing::warn!(error = %err, "ignoring unparsable {DEFAULT_CONFIG_FILE}");
                }
            }
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings.api_base = normalize_api_base(&settings.api_base);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;

    if let Some(v) = file_cfg.get("api_base").and_then(toml::Value::as_str) {
        settings.api_base = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("notification_ttl_secs")
        .and_then(toml::Value::as_integer)
    {
        if let Some(ttl) = u64::try_from(v).ok().filter(|ttl| *ttl > 0) {
            settings.notification_ttl_secs = ttl;
        }
    }
    if let Some(v) = file_cfg.get("offline").and_then(toml::Value::as_bool) {
        settings.offline = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CATALOG_API_BASE") {
        settings.api_base = v;
    }
    if let Some(v) = lookup("APP__API_BASE") {
        settings.api_base = v;
    }

    if let Some(v) = lookup("APP__NOTIFICATION_TTL_SECS") {
        if let Some(ttl) = v.parse::<u64>().ok().filter(|ttl| *ttl > 0) {
            settings.notification_ttl_secs = ttl;
        }
    }

    if let Some(v) = lookup("APP__OFFLINE") {
        settings.offline = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Settings::default().api_base;
    }
    trimmed.to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
