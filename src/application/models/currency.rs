use crate::application::models::common::{Data, Links, Timestamps};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A single currency wrapped in the response envelope
pub type CurrencyData = Data<Currency>;

/// A list of currencies wrapped in the response envelope
pub type CurrenciesData = Data<Vec<Currency>>;

/// Currency configured in the store
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Currency {
    /// Server assigned identifier, absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource type, always "currency"
    #[serde(rename = "type", default)]
    pub type_: String,
    /// ISO 4217 code, e.g. "GBP"
    #[serde(default)]
    pub code: String,
    /// Rate against the default currency
    #[serde(default)]
    pub exchange_rate: f64,
    /// Display format, e.g. "£{price}"
    #[serde(default)]
    pub format: String,
    /// Decimal separator
    #[serde(default)]
    pub decimal_point: String,
    /// Thousands separator
    #[serde(default)]
    pub thousand_separator: String,
    /// Number of decimal places shown
    #[serde(default)]
    pub decimal_places: i64,
    /// Whether this is the store's default currency
    #[serde(default)]
    pub default: bool,
    /// Whether the currency can be used
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CurrencyMeta>,
}

impl Currency {
    /// Creates a currency ready to be sent to the API
    pub fn new(code: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            type_: "currency".to_string(),
            code: code.into(),
            format: format.into(),
            exchange_rate: 1.0,
            decimal_point: ".".to_string(),
            thousand_separator: ",".to_string(),
            decimal_places: 2,
            enabled: true,
            ..Self::default()
        }
    }
}

/// Server maintained metadata of a currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CurrencyMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Timestamps>,
}
