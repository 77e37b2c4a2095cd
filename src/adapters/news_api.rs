use crate::adapters::http::get_json;
use crate::domain::model::NewsItem;
use crate::domain::ports::NewsProvider;
use crate::domain::upstream::{NewsArticle, NewsResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const PROVIDER: &str = "newsapi";

/// Candidates requested from the provider per lookup.
pub const PAGE_SIZE: u32 = 20;
/// Headlines kept in the report.
pub const MAX_ITEMS: usize = 5;

pub struct NewsApiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    async fn search(&self, api_key: &str, country_name: &str) -> Result<Vec<NewsArticle>> {
        tracing::debug!(
            "📡 {}: GET {} (qInTitle={})",
            PROVIDER,
            self.endpoint,
            country_name
        );

        let page_size = PAGE_SIZE.to_string();
        let request = self.client.get(&self.endpoint).query(&[
            ("qInTitle", country_name),
            ("language", "en"),
            ("pageSize", page_size.as_str()),
            ("sortBy", "publishedAt"),
            ("apiKey", api_key),
        ]);

        let response: NewsResponse = get_json(request, PROVIDER).await?;
        Ok(response.articles)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch_news(&self, country_name: &str) -> Vec<NewsItem> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("{}: no API key configured, skipping", PROVIDER);
            return Vec::new();
        };

        match self.search(api_key, country_name).await {
            Ok(articles) => relevant_headlines(articles, country_name),
            Err(e) => {
                tracing::warn!(
                    "⚠️ {}: headlines for '{}' unavailable: {}",
                    PROVIDER,
                    country_name,
                    e
                );
                Vec::new()
            }
        }
    }
}

/// Keeps articles whose title mentions the country (case-insensitive), in provider
/// order, capped at [`MAX_ITEMS`].
pub fn relevant_headlines(articles: Vec<NewsArticle>, country_name: &str) -> Vec<NewsItem> {
    let needle = country_name.to_lowercase();

    articles
        .into_iter()
        .filter_map(|article| {
            let title = article.title?;
            if !title.to_lowercase().contains(&needle) {
                return None;
            }
            Some(NewsItem {
                title,
                image: article.url_to_image,
                description: article.description,
                url: article.url.unwrap_or_default(),
            })
        })
        .take(MAX_ITEMS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn article(title: &str) -> serde_json::Value {
        serde_json::json!({
            "source": {"id": null, "name": "Wire"},
            "title": title,
            "description": format!("About: {}", title),
            "url": format!("https://news.example.com/{}", title.len()),
            "urlToImage": null,
            "publishedAt": "2024-11-02T08:00:00Z"
        })
    }

    fn articles(titles: &[&str]) -> Vec<NewsArticle> {
        titles
            .iter()
            .map(|t| serde_json::from_value(article(t)).unwrap())
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = relevant_headlines(
            articles(&["JAPAN wins bid", "Markets slide", "Rain in japan's north"]),
            "Japan",
        );

        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["JAPAN wins bid", "Rain in japan's north"]);
    }

    #[test]
    fn test_truncates_to_five_in_order() {
        let titles: Vec<String> = (1..=8).map(|i| format!("Peru story {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();

        let items = relevant_headlines(articles(&refs), "peru");

        assert_eq!(items.len(), MAX_ITEMS);
        assert_eq!(items[0].title, "Peru story 1");
        assert_eq!(items[4].title, "Peru story 5");
    }

    #[test]
    fn test_missing_title_is_dropped() {
        let article: NewsArticle =
            serde_json::from_str(r#"{"title": null, "url": "https://news.example.com/x"}"#)
                .unwrap();
        assert!(relevant_headlines(vec![article], "Chile").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_news_sends_expected_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("qInTitle", "Japan")
                .query_param("language", "en")
                .query_param("pageSize", "20")
                .query_param("sortBy", "publishedAt")
                .query_param("apiKey", "news-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": "ok",
                    "totalResults": 2,
                    "articles": [article("Japan election results"), article("Weather update")]
                }));
        });

        let provider = NewsApiClient::new(
            Client::new(),
            server.url("/v2/everything"),
            Some("news-key".to_string()),
        );
        let items = provider.fetch_news("Japan").await;

        api_mock.assert();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Japan election results");
        assert_eq!(
            items[0].description.as_deref(),
            Some("About: Japan election results")
        );
        assert!(items[0].image.is_none());
    }

    #[tokio::test]
    async fn test_no_key_makes_no_request() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let provider = NewsApiClient::new(Client::new(), server.url("/v2/everything"), None);

        assert!(provider.fetch_news("Japan").await.is_empty());
        api_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_provider_error_yields_empty_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(429).json_body(serde_json::json!({
                "status": "error",
                "code": "rateLimited",
                "message": "You have made too many requests recently."
            }));
        });

        let provider = NewsApiClient::new(
            Client::new(),
            server.url("/v2/everything"),
            Some("news-key".to_string()),
        );

        assert!(provider.fetch_news("Japan").await.is_empty());
    }
}
