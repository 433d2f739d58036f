use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;

pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: SecretString,
}

impl ApiClient {
    pub fn new(base_url: Url, token: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(config.api_url, config.api_token)
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so `/`, `?` and `#` inside a slug stay part of that segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL {} cannot take a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub async fn get_json(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint(segments)?;

        tracing::debug!(%url, "fetching");

        let value = self
            .client
            .get(url.clone())
            .bearer_auth(self.token.expose_secret())
            .query(query)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?
            .error_for_status()
            .context("API returned error status")?
            .json()
            .await?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(
            base_url.parse().unwrap(),
            SecretString::new("token".to_owned()),
        )
    }

    #[test]
    fn endpoints_keep_the_base_path() {
        let expected = "https://lms.test/api/v1/lessons/slug/fractions";

        for base_url in ["https://lms.test/api/v1", "https://lms.test/api/v1/"] {
            let url = client(base_url)
                .endpoint(&["lessons", "slug", "fractions"])
                .unwrap();

            assert_eq!(url.as_str(), expected);
        }
    }

    #[test]
    fn endpoints_on_a_bare_host() {
        let url = client("https://lms.test").endpoint(&["users", "me"]).unwrap();

        assert_eq!(url.as_str(), "https://lms.test/users/me");
    }

    #[test]
    fn slug_segments_are_encoded() {
        let url = client("https://lms.test/api/")
            .endpoint(&["lessons", "slug", "a/b?c#d"])
            .unwrap();

        assert_eq!(url.as_str(), "https://lms.test/api/lessons/slug/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }
}
