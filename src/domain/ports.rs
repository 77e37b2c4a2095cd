use crate::domain::model::{ExchangeSnapshot, NewsItem, PersonSummary};
use crate::domain::upstream::RawCountry;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the report subject. The only provider whose failure is fatal.
#[async_trait]
pub trait PersonProvider: Send + Sync {
    async fn fetch_person(&self) -> Result<PersonSummary>;
}

/// Country metadata by name. `None` covers both "not found" and "provider failed".
#[async_trait]
pub trait CountryProvider: Send + Sync {
    async fn lookup_country(&self, name: &str) -> Option<RawCountry>;
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_rates(&self, currency_code: &str) -> ExchangeSnapshot;
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_news(&self, country_name: &str) -> Vec<NewsItem>;
}
