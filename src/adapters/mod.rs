// Adapters layer: HTTP clients for the four upstream providers.

pub mod exchange_rate;
pub mod http;
pub mod news_api;
pub mod random_user;
pub mod rest_countries;

use crate::config::AppConfig;
use crate::core::report::ReportBuilder;
use crate::utils::error::Result;
use std::sync::Arc;

pub use exchange_rate::ExchangeRateClient;
pub use news_api::NewsApiClient;
pub use random_user::RandomUserClient;
pub use rest_countries::RestCountriesClient;

/// Wires the live providers from resolved settings. All providers share one connection pool.
pub fn report_builder_from_config(config: &AppConfig) -> Result<ReportBuilder> {
    let client = http::build_client(config.request_timeout)?;
    let endpoints = &config.endpoints;
    let credentials = &config.credentials;

    tracing::info!(
        "🔑 Provider keys: restcountries {}, exchange rates {}, news {}",
        key_state(&credentials.restcountries),
        key_state(&credentials.exchange_rate),
        key_state(&credentials.news),
    );

    Ok(ReportBuilder::new(
        Arc::new(RandomUserClient::new(client.clone(), &endpoints.random_user)),
        Arc::new(RestCountriesClient::new(
            client.clone(),
            &endpoints.countries,
            credentials.restcountries.clone(),
        )),
        Arc::new(ExchangeRateClient::new(
            client.clone(),
            &endpoints.exchange,
            credentials.exchange_rate.clone(),
        )),
        Arc::new(NewsApiClient::new(
            client,
            &endpoints.news,
            credentials.news.clone(),
        )),
    ))
}

fn key_state(key: &Option<String>) -> &'static str {
    if key.is_some() {
        "set"
    } else {
        "unset"
    }
}
