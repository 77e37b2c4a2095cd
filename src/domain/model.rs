use serde::{Deserialize, Serialize};

/// Sentinel used wherever a value could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub profile_pic: String,
    pub age: u32,
    /// Passed through exactly as the provider sent it.
    pub dob: String,
    pub city: String,
    pub country: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl CurrencyDescriptor {
    pub fn unavailable() -> Self {
        Self {
            code: NOT_AVAILABLE.to_string(),
            name: NOT_AVAILABLE.to_string(),
            symbol: String::new(),
        }
    }
}

/// Country metadata in the shape the client renders. Never partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub capital: String,
    pub languages: Vec<String>,
    pub currency: CurrencyDescriptor,
    pub flag: String,
}

impl CountrySummary {
    pub fn unavailable() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            capital: NOT_AVAILABLE.to_string(),
            languages: Vec::new(),
            currency: CurrencyDescriptor::unavailable(),
            flag: String::new(),
        }
    }
}

/// Conversion rates for one base currency.
///
/// `available == false` is an expected outcome (no key, unknown base, provider failure)
/// and is rendered as such by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSnapshot {
    pub available: bool,
    pub base: String,
    #[serde(rename = "toUSD")]
    pub to_usd: Option<f64>,
    #[serde(rename = "toKZT")]
    pub to_kzt: Option<f64>,
}

impl ExchangeSnapshot {
    pub fn unavailable(base: &str) -> Self {
        Self {
            available: false,
            base: base.to_string(),
            to_usd: None,
            to_kzt: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub url: String,
}

/// Everything the client needs for one page render. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub user_data: PersonSummary,
    pub country_data: CountrySummary,
    pub exchange_data: ExchangeSnapshot,
    pub news_data: Vec<NewsItem>,
}
