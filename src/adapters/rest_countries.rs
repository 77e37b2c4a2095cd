use crate::adapters::http::{get_json, join_segments};
use crate::domain::ports::CountryProvider;
use crate::domain::upstream::RawCountry;
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;

const PROVIDER: &str = "restcountries";
const API_KEY_HEADER: &str = "x-api-key";

pub struct RestCountriesClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RestCountriesClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// One query by name. An empty result list counts as a failure.
    async fn query(&self, name: &str, full_text: bool) -> Result<RawCountry> {
        let url = join_segments(&self.endpoint, &["name", name])?;
        tracing::debug!("📡 {}: GET {} (fullText={})", PROVIDER, url, full_text);

        let mut request = self.client.get(url).query(&[("fullText", full_text)]);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let countries: Vec<RawCountry> = get_json(request, PROVIDER).await?;
        countries
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::empty_response(PROVIDER))
    }
}

#[async_trait]
impl CountryProvider for RestCountriesClient {
    /// Exact match first, then a single partial-match attempt. Never errors.
    async fn lookup_country(&self, name: &str) -> Option<RawCountry> {
        match self.query(name, true).await {
            Ok(country) => Some(country),
            Err(exact_err) => {
                tracing::warn!(
                    "⚠️ {}: exact lookup for '{}' failed ({}), retrying with partial match",
                    PROVIDER,
                    name,
                    exact_err
                );
                match self.query(name, false).await {
                    Ok(country) => Some(country),
                    Err(partial_err) => {
                        tracing::warn!(
                            "⚠️ {}: partial lookup for '{}' failed ({}), using placeholder country",
                            PROVIDER,
                            name,
                            partial_err
                        );
                        None
                    }
                }
            }
        }
    }
}
