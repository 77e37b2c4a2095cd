//! Wire shapes of the third-party providers.
//!
//! Only the fields the report reads are modelled. Anything a provider may omit
//! carries a serde default so a sparse record still deserializes.

use serde::Deserialize;
use std::collections::BTreeMap;

// randomuser.me

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserResponse {
    #[serde(default)]
    pub results: Vec<RandomUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUser {
    pub gender: String,
    pub name: RandomUserName,
    pub location: RandomUserLocation,
    pub dob: RandomUserDob,
    pub picture: RandomUserPicture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserLocation {
    pub street: RandomUserStreet,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserStreet {
    pub number: serde_json::Value,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserDob {
    pub date: String,
    pub age: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserPicture {
    pub large: String,
}

// restcountries.com v3.1

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: Option<RawCountryName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, RawCurrency>>,
    #[serde(default)]
    pub flags: Option<RawFlags>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountryName {
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurrency {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

// exchangerate-api.com v6

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateResponse {
    #[serde(default)]
    pub conversion_rates: BTreeMap<String, f64>,
}

// newsapi.org v2

#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_country_deserializes() {
        let country: RawCountry =
            serde_json::from_str(r#"{"name": {"common": "Antarctica"}}"#).unwrap();

        assert_eq!(
            country.name.and_then(|n| n.common).as_deref(),
            Some("Antarctica")
        );
        assert!(country.capital.is_none());
        assert!(country.currencies.is_none());
    }

    #[test]
    fn test_random_user_deserializes() {
        let body = serde_json::json!({
            "results": [{
                "gender": "male",
                "name": {"title": "Mr", "first": "Kenji", "last": "Sato"},
                "location": {
                    "street": {"number": 4821, "name": "Sakura-dori"},
                    "city": "Osaka",
                    "country": "Japan"
                },
                "dob": {"date": "1988-03-14T02:11:54.123Z", "age": 36},
                "picture": {"large": "https://randomuser.me/api/portraits/men/7.jpg"}
            }]
        });

        let response: RandomUserResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].location.street.number, 4821);
        assert_eq!(response.results[0].dob.age, 36);
    }

    #[test]
    fn test_article_with_null_fields() {
        let article: NewsArticle = serde_json::from_str(
            r#"{"title": null, "urlToImage": null, "description": null, "url": "https://example.com/a"}"#,
        )
        .unwrap();

        assert!(article.title.is_none());
        assert!(article.url_to_image.is_none());
        assert_eq!(article.url.as_deref(), Some("https://example.com/a"));
    }
}
