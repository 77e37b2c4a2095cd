use crate::adapters::http::get_json;
use crate::domain::model::PersonSummary;
use crate::domain::ports::PersonProvider;
use crate::domain::upstream::{RandomUser, RandomUserResponse};
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;

const PROVIDER: &str = "randomuser";

pub struct RandomUserClient {
    client: Client,
    endpoint: String,
}

impl RandomUserClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PersonProvider for RandomUserClient {
    async fn fetch_person(&self) -> Result<PersonSummary> {
        tracing::debug!("📡 {}: GET {}", PROVIDER, self.endpoint);
        let response: RandomUserResponse = get_json(self.client.get(&self.endpoint), PROVIDER).await?;

        let user = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::empty_response(PROVIDER))?;

        Ok(summarize(user))
    }
}

fn summarize(user: RandomUser) -> PersonSummary {
    // the street number arrives as a number today but has been a string before
    let number = match user.location.street.number {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    };

    PersonSummary {
        first_name: user.name.first,
        last_name: user.name.last,
        gender: user.gender,
        profile_pic: user.picture.large,
        age: user.dob.age,
        dob: user.dob.date,
        city: user.location.city,
        country: user.location.country,
        address: format!("{} {}", number, user.location.street.name),
    }
}
