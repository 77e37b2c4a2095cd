use crate::utils::error::{ReportError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Sends the request and decodes a JSON body.
///
/// Transport failures and non-2xx statuses surface as `ApiError`; a body that does not
/// match `T` surfaces as `SerializationError`.
pub async fn get_json<T: DeserializeOwned>(request: RequestBuilder, provider: &str) -> Result<T> {
    let response = request.send().await?;
    tracing::debug!("📡 {}: response status {}", provider, response.status());

    let body = response.error_for_status()?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Appends percent-encoded path segments to `base`.
pub fn join_segments(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    {
        let mut path = url.path_segments_mut().map_err(|_| ReportError::ConfigError {
            message: format!("{} cannot be used as a base URL", base),
        })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_segments_encodes_names() {
        let url = join_segments("https://restcountries.com/v3.1", &["name", "Côte d'Ivoire"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/C%C3%B4te%20d'Ivoire"
        );
    }

    #[test]
    fn test_join_segments_with_trailing_slash() {
        let url = join_segments("http://127.0.0.1:8080/v6/", &["key", "latest", "KZT"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v6/key/latest/KZT");
    }

    #[test]
    fn test_join_segments_rejects_non_base_url() {
        assert!(join_segments("mailto:someone@example.com", &["x"]).is_err());
    }
}
