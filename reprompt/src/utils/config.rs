//! JSON loading for [`ElementConfig`] (feature `json`).
//!
//! ```rust
//! use reprompt::utils::{ElementConfig, ElementKind, ElementValue};
//!
//! let config = ElementConfig::from_json(
//!     r#"{"kind":"character","name":"letter","low":"a","high":"f"}"#,
//! )
//! .unwrap();
//! assert_eq!(config.kind(), ElementKind::Character);
//! assert_eq!(config.high(), &ElementValue::Character('f'));
//! ```
use crate::utils::element::{ConfigError, ElementConfig, ElementKind};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElementConfig {
    kind: ElementKind,
    name: Option<String>,
    low: Option<Value>,
    high: Option<Value>,
}

impl ElementConfig {
    /// Decodes `{"kind": ..., "name": ..., "low": ..., "high": ...}`.
    ///
    /// Bounds may be JSON strings, numbers or booleans; they are parsed with the
    /// lexical rules of `kind`. Missing fields fall back to the kind's
    /// [`preset`](ElementConfig::preset).
    pub fn from_json(input: &str) -> Result<ElementConfig, ConfigError> {
        let raw: RawElementConfig =
            serde_json::from_str(input).map_err(|e| ConfigError::Json(e.to_string()))?;
        let preset = ElementConfig::preset(raw.kind);

        let name = raw.name.unwrap_or_else(|| preset.name().to_string());
        let low = raw.low.map_or_else(|| preset.low().to_string(), bound_text);
        let high = raw.high.map_or_else(|| preset.high().to_string(), bound_text);

        ElementConfig::from_bounds(raw.kind, name, &low, &high)
    }
}

fn bound_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
