use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::format::{CurrencyFormat, Grouping};
use crate::storage::PreferenceStore;

const SETTINGS_KEY: &str = "settings";

/// Build-time API origin. Empty means same-origin requests.
const API_BASE: Option<&str> = option_env!("EXPENSE_API_BASE");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub currency_symbol: String,
    pub grouping: Grouping,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: API_BASE.unwrap_or_default().to_string(),
            currency_symbol: "₹".to_string(),
            grouping: Grouping::Indian,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Reads the stored overrides, falling back to defaults when nothing is
    /// stored or the stored JSON is unreadable.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let Some(raw) = store.get(SETTINGS_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("ignoring stored settings: {err}");
                Self::default()
            }
        }
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.grouping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_when_nothing_stored() {
        let settings = Settings::load(&MemoryStore::default());
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.grouping, Grouping::Indian);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let store = MemoryStore::default();
        store.set(SETTINGS_KEY, r#"{"currency_symbol":"$","grouping":"thousands"}"#);
        let settings = Settings::load(&store);
        assert_eq!(settings.currency().format(1234567.0), "$1,234,567.00");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn broken_json_falls_back_to_defaults() {
        let store = MemoryStore::default();
        store.set(SETTINGS_KEY, "{not json");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn api_base_override() {
        let store = MemoryStore::default();
        store.set(SETTINGS_KEY, r#"{"api_base":"http://localhost:5000"}"#);
        let settings = Settings::load(&store);
        assert_eq!(settings.api_base, "http://localhost:5000");
        assert_eq!(settings.currency_symbol, "₹");
    }
}
