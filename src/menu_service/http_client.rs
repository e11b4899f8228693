use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;

/// HTTP client for the menu server API.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: std::time::Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get full URL by prepending the server base if needed
    pub fn get_full_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }

    /// Make a GET request and deserialize the JSON response
    pub async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let url = self.get_full_url(url);
        debug!("Getting url: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to get response")?
            .error_for_status()
            .context("Not a success status")?;

        let response_json = response
            .json::<T>()
            .await
            .context("Failed to deserialize response to type T")?;
        Ok(response_json)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned + std::fmt::Debug,
        B: Serialize,
    {
        let url = self.get_full_url(url);
        debug!("Posting to url: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .context("Failed to get response for post")?
            .error_for_status()
            .context("Not a success status")?
            .json::<T>()
            .await
            .context("Failed to deserialize response to type T")?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_full_url_with_relative_path() {
        let client = HttpClient::new("http://localhost:8080");
        let result = client.get_full_url("/apps");
        assert_eq!(result, "http://localhost:8080/apps");
    }

    #[test]
    fn test_get_full_url_strips_duplicate_slashes() {
        let client = HttpClient::new("http://localhost:8080/");
        let result = client.get_full_url("apps");
        assert_eq!(result, "http://localhost:8080/apps");
    }

    #[test]
    fn test_get_full_url_with_absolute_url() {
        let client = HttpClient::new("http://localhost:8080");
        let full_url = "https://example.com/api/test";
        let result = client.get_full_url(full_url);
        assert_eq!(result, full_url);
    }
}
