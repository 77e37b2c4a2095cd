use crate::adapters::http::{get_json, join_segments};
use crate::domain::model::{ExchangeSnapshot, NOT_AVAILABLE};
use crate::domain::ports::ExchangeRateProvider;
use crate::domain::upstream::ExchangeRateResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const PROVIDER: &str = "exchangerate-api";

pub struct ExchangeRateClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ExchangeRateClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    async fn latest(&self, api_key: &str, base: &str) -> Result<ExchangeRateResponse> {
        let url = join_segments(&self.endpoint, &[api_key, "latest", base])?;
        // the key is part of the path, keep it out of the logs
        tracing::debug!("📡 {}: GET {}/***/latest/{}", PROVIDER, self.endpoint, base);

        get_json(self.client.get(url), PROVIDER).await
    }
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateClient {
    async fn fetch_rates(&self, currency_code: &str) -> ExchangeSnapshot {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("{}: no API key configured, skipping", PROVIDER);
            return ExchangeSnapshot::unavailable(currency_code);
        };

        if currency_code == NOT_AVAILABLE {
            return ExchangeSnapshot::unavailable(currency_code);
        }

        match self.latest(api_key, currency_code).await {
            Ok(response) => ExchangeSnapshot {
                available: true,
                base: currency_code.to_string(),
                to_usd: response.conversion_rates.get("USD").copied(),
                to_kzt: response.conversion_rates.get("KZT").copied(),
            },
            Err(e) => {
                tracing::warn!(
                    "⚠️ {}: rates for {} unavailable: {}",
                    PROVIDER,
                    currency_code,
                    e
                );
                ExchangeSnapshot::unavailable(currency_code)
            }
        }
    }
}
