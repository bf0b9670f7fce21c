use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Keys this server understands, in their wire spelling
const KNOWN_KEYS: [&str; 3] = ["enableDiagnostics", "maxNumberOfProblems", "evictOnClose"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

/// Runtime settings sent by the client
///
/// Read from `initializationOptions` and from `workspace/didChangeConfiguration`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Accepted for compatibility; this server never publishes diagnostics
    pub enable_diagnostics: bool,
    /// Accepted for compatibility, unused like `enable_diagnostics`
    pub max_number_of_problems: u32,
    /// Drop a document's symbol table when it is closed
    pub evict_on_close: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_diagnostics: false,
            max_number_of_problems: 100,
            evict_on_close: false,
        }
    }
}

impl Settings {
    /// Apply a client payload on top of these settings
    ///
    /// Accepts the settings object itself or one nested under a `mus` key, as
    /// sent by editors that scope configuration by section. Keys missing from
    /// the payload keep their current value.
    ///
    /// Returns `Ok(None)` when the payload carries nothing for this server:
    /// `null`, a `null` section, or an object without any known key. The
    /// caller keeps its settings in that case.
    pub fn merged_with(&self, value: Option<Value>) -> Result<Option<Settings>, ConfigError> {
        let Some(section) = settings_section(value) else {
            return Ok(None);
        };

        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.extend(section);

        Ok(Some(serde_json::from_value(Value::Object(merged))?))
    }
}

/// The part of a payload addressed to this server, if any
fn settings_section(value: Option<Value>) -> Option<Map<String, Value>> {
    let map = match value? {
        Value::Object(mut map) if map.contains_key("mus") => match map.remove("mus")? {
            Value::Object(section) => section,
            _ => return None,
        },
        Value::Object(map) => map,
        _ => return None,
    };

    if KNOWN_KEYS.iter().any(|key| map.contains_key(*key)) {
        Some(map)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn evicting() -> Settings {
        Settings {
            evict_on_close: true,
            ..Settings::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.enable_diagnostics);
        assert!(!settings.evict_on_close);
        assert_eq!(settings.max_number_of_problems, 100);
    }

    #[test]
    fn test_partial_object() {
        let settings = Settings::default()
            .merged_with(Some(json!({ "evictOnClose": true })))
            .unwrap()
            .unwrap();
        assert!(settings.evict_on_close);
        assert!(!settings.enable_diagnostics);
    }

    #[test]
    fn test_partial_object_keeps_other_fields() {
        let settings = evicting()
            .merged_with(Some(json!({ "enableDiagnostics": true })))
            .unwrap()
            .unwrap();
        assert!(settings.enable_diagnostics);
        assert!(settings.evict_on_close);
    }

    #[test]
    fn test_nested_section() {
        let settings = Settings::default()
            .merged_with(Some(json!({
                "mus": { "enableDiagnostics": true, "maxNumberOfProblems": 5 }
            })))
            .unwrap()
            .unwrap();
        assert!(settings.enable_diagnostics);
        assert_eq!(settings.max_number_of_problems, 5);
    }

    #[test]
    fn test_nothing_to_apply() {
        let current = evicting();
        assert!(current.merged_with(None).unwrap().is_none());
        assert!(current.merged_with(Some(Value::Null)).unwrap().is_none());
        assert!(current.merged_with(Some(json!({ "mus": null }))).unwrap().is_none());
        assert!(current.merged_with(Some(json!({ "mus": 3 }))).unwrap().is_none());
        assert!(current.merged_with(Some(json!("verbose"))).unwrap().is_none());
    }

    #[test]
    fn test_unrelated_section_is_ignored() {
        let current = evicting();
        let payload = json!({ "python": { "analysis": true }, "editor.tabSize": 4 });
        assert!(current.merged_with(Some(payload)).unwrap().is_none());
    }

    #[test]
    fn test_unknown_keys_beside_known_ones() {
        let settings = Settings::default()
            .merged_with(Some(json!({ "evictOnClose": true, "trace": "off" })))
            .unwrap()
            .unwrap();
        assert!(settings.evict_on_close);
    }

    #[test]
    fn test_invalid_settings() {
        let err = Settings::default()
            .merged_with(Some(json!({ "evictOnClose": "yes" })))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSettings(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }
}
