use crate::core::normalize::normalize_country;
use crate::domain::model::Report;
use crate::domain::ports::{CountryProvider, ExchangeRateProvider, NewsProvider, PersonProvider};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Instant;

/// Assembles one [`Report`] from the four providers.
///
/// Steps run strictly in order. Only the person fetch can fail the report; the
/// other providers already degrade to their empty shapes.
#[derive(Clone)]
pub struct ReportBuilder {
    person: Arc<dyn PersonProvider>,
    country: Arc<dyn CountryProvider>,
    exchange: Arc<dyn ExchangeRateProvider>,
    news: Arc<dyn NewsProvider>,
}

impl ReportBuilder {
    pub fn new(
        person: Arc<dyn PersonProvider>,
        country: Arc<dyn CountryProvider>,
        exchange: Arc<dyn ExchangeRateProvider>,
        news: Arc<dyn NewsProvider>,
    ) -> Self {
        Self {
            person,
            country,
            exchange,
            news,
        }
    }

    pub async fn build_report(&self) -> Result<Report> {
        let started = Instant::now();

        let user_data = self.person.fetch_person().await?;
        tracing::debug!(
            "👤 Subject: {} {} from {}",
            user_data.first_name,
            user_data.last_name,
            user_data.country
        );

        let country_raw = self.country.lookup_country(&user_data.country).await;
        let country_data = normalize_country(country_raw.as_ref());
        tracing::debug!(
            "🌍 Country '{}' resolved as '{}' (currency {})",
            user_data.country,
            country_data.name,
            country_data.currency.code
        );

        let exchange_data = self.exchange.fetch_rates(&country_data.currency.code).await;
        tracing::debug!(
            "💱 Exchange rates for {}: available={}",
            exchange_data.base,
            exchange_data.available
        );

        // news is keyed on the subject's country as given, not the normalized name
        let news_data = self.news.fetch_news(&user_data.country).await;
        tracing::debug!("📰 {} headlines for {}", news_data.len(), user_data.country);

        tracing::info!(
            "✅ Report built for {} in {:?}",
            user_data.country,
            started.elapsed()
        );

        Ok(Report {
            user_data,
            country_data,
            exchange_data,
            news_data,
        })
    }
}
