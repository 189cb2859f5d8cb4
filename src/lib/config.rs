//! Client configuration. Values are baked in at build time through
//! `EXPANSE_API_BASE_URL` and `EXPANSE_LOG_LEVEL`; a static deployment can
//! override them without rebuilding by defining `window.EXPANSE_CONFIG` before
//! the bundle loads. Everything here ends up in the browser, so it must never
//! hold secrets.

use serde::Deserialize;

/// API host used when nothing is configured at build time.
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Log level used when nothing (or garbage) is configured.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
/// Global the runtime override is read from.
const RUNTIME_GLOBAL: &str = "EXPANSE_CONFIG";

/// Path of the login endpoint relative to the API base.
#[cfg(target_arch = "wasm32")]
pub(crate) const LOGIN_PATH: &str = "/api/auth/login";
/// Path of the registration endpoint relative to the API base.
#[cfg(target_arch = "wasm32")]
pub(crate) const REGISTER_PATH: &str = "/api/auth/register";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("EXPANSE_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_level: option_env!("EXPANSE_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Build-time values with the page's runtime override applied on top.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(overrides) = runtime_overrides() {
            overrides.apply(&mut config);
        }
        config
    }

    /// Joins the API base URL and `path` with exactly one slash between them.
    /// An empty base yields the bare path so requests stay same-origin.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let path = path.trim();

        if base.is_empty() {
            path.to_string()
        } else {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
    }
}

/// Shape of `window.EXPANSE_CONFIG`. Unknown keys are ignored and every key
/// is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuntimeOverrides {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

impl RuntimeOverrides {
    /// Parses the override object from its JSON text. Anything that is not an
    /// object of strings is dropped with a warning.
    fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(overrides) => Some(overrides),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed {RUNTIME_GLOBAL}");
                None
            }
        }
    }

    /// Overwrites the fields that carry a non-blank value.
    fn apply(self, config: &mut AppConfig) {
        if let Some(value) = self.api_base_url.as_deref().and_then(non_blank) {
            config.api_base_url = value;
        }
        if let Some(value) = self.log_level.as_deref().and_then(non_blank) {
            config.log_level = value;
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(target_arch = "wasm32")]
fn runtime_overrides() -> Option<RuntimeOverrides> {
    use js_sys::{JSON, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(RUNTIME_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let json = JSON::stringify(&value).ok()?.as_string()?;
    RuntimeOverrides::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeOverrides};

    fn config(base: &str) -> AppConfig {
        AppConfig {
            api_base_url: base.to_string(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn overrides_replace_configured_values() {
        let mut config = config("http://localhost:5000");
        let overrides = RuntimeOverrides::from_json(
            r#"{"api_base_url":" https://api.expanse.dev ","log_level":"debug"}"#,
        )
        .expect("valid overrides");

        overrides.apply(&mut config);

        assert_eq!(config.api_base_url, "https://api.expanse.dev");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_or_missing_overrides_keep_defaults() {
        let mut config = config("http://localhost:5000");
        let overrides = RuntimeOverrides::from_json(r#"{"api_base_url":"   ","theme":"dark"}"#)
            .expect("unknown keys are ignored");

        overrides.apply(&mut config);

        assert_eq!(config, self::config("http://localhost:5000"));
    }

    #[test]
    fn malformed_overrides_are_dropped() {
        assert!(RuntimeOverrides::from_json(r#"{"api_base_url":42}"#).is_none());
        assert!(RuntimeOverrides::from_json("api_base_url=x").is_none());
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        assert_eq!(
            config("http://localhost:5000/").endpoint("/api/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(
            config("http://localhost:5000").endpoint("api/auth/register"),
            "http://localhost:5000/api/auth/register"
        );
    }

    #[test]
    fn endpoint_without_base_stays_relative() {
        assert_eq!(config("  ").endpoint("/api/auth/login"), "/api/auth/login");
    }
}
