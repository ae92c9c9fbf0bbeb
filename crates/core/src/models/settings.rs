use serde::{Deserialize, Serialize};

/// User-configurable settings, stored inside the encrypted ledger vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the hosted backend (e.g., "https://data.example.com").
    /// `None` means the app runs purely against the local ledger.
    #[serde(default)]
    pub service_url: Option<String>,

    /// API key sent with every hosted-backend request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// The currency in which all amounts are displayed (e.g., "USD", "EUR").
    pub default_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: None,
            api_key: None,
            default_currency: "USD".to_string(),
        }
    }
}
