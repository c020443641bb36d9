use serde::{Deserialize, Serialize};

/// Per-store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Label attached to every log event emitted by the store (e.g., "app", "settings").
    #[serde(default = "default_label")]
    pub label: String,
    /// Log every dispatched action and its commit outcome at debug level.
    #[serde(default)]
    pub log_dispatch: bool,
}

fn default_label() -> String {
    "store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            log_dispatch: false,
        }
    }
}

impl StoreConfig {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn log_dispatch(mut self, enabled: bool) -> Self {
        self.log_dispatch = enabled;
        self
    }
}
