//! Client configuration read from the host page.
//!
//! The mount document can carry a JSON blob in a `data-config` attribute on
//! `<body>` to select deployment-specific behavior without a rebuild:
//!
//! ```json
//! { "history_scope": "per_subject", "asset_base": "https://cdn.example" }
//! ```
//!
//! Missing attribute, missing fields, and malformed JSON all fall back to
//! defaults; configuration can never keep the app from mounting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::history::ScopePolicy;
use serde::Deserialize;

/// Page-level configuration, applied once at mount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Whether undo history is scoped per (sex, view) subject or shared
    /// across subject switches.
    pub history_scope: ScopePolicy,
    /// Prefix for body-image asset URLs (empty = same origin).
    pub asset_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_scope: ScopePolicy::PerSubject,
            asset_base: String::new(),
        }
    }
}

/// Parse a raw `data-config` value, falling back to defaults on any error.
pub fn parse(raw: Option<&str>) -> AppConfig {
    let Some(raw) = raw else {
        return AppConfig::default();
    };
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("invalid data-config attribute, using defaults: {err}");
            AppConfig::default()
        }
    }
}

/// Read the configuration from the mounted document's `<body>`.
pub fn read() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-config"));
    parse(raw.as_deref())
}
