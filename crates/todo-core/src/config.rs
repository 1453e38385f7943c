//! Runtime configuration
//!
//! Everything has a default; a host page may override fields by passing a
//! JSON object, e.g. `{"storage_key": "work-todos", "drag": {"threshold_px": 8}}`.

use serde::{Deserialize, Serialize};

use crate::repository::DEFAULT_STORAGE_KEY;

/// Movement in pixels before a pointer-down becomes a drag
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// How long a finished drag keeps swallowing the gesture's trailing click
pub const CLICK_GUARD_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub threshold_px: f64,
    pub click_guard_ms: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold_px: DRAG_THRESHOLD_PX,
            click_guard_ms: CLICK_GUARD_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Key of the storage slot holding the list
    pub storage_key: String,
    pub drag: DragConfig,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            drag: DragConfig::default(),
        }
    }
}

impl TodoConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.storage_key, "todoListItems");
        assert_eq!(config.drag.threshold_px, 5.0);
    }

    #[test]
    fn test_partial_overrides() {
        let config = TodoConfig::from_json(r#"{"drag": {"threshold_px": 8}}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.drag.threshold_px, 8.0);
        assert_eq!(config.drag.click_guard_ms, CLICK_GUARD_MS);
    }
}
