use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::time::Duration;

/// Transport seam mezi fetcherem a sítí.
/// Production implementation is [`EsClient`]; tests substitute a mock that
/// records call counts and serves canned responses.
pub trait CatalogTransport {
    /// Issues a single GET with an empty body and returns the HTTP status
    /// code together with the raw body text. `Err` means the request never
    /// produced a response (connection refused, timeout, DNS failure).
    fn get_raw(&self, path: &str) -> impl std::future::Future<Output = Result<(u16, String)>> + Send;
}

#[derive(Debug, Clone)]
pub struct EsClient {
    base_url: String,
    client: Client,
    api_key: String,
}

impl EsClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        // Ořízni trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            client,
            api_key: api_key.to_string(),
        })
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CatalogTransport for EsClient {
    async fn get_raw(&self, path: &str) -> Result<(u16, String)> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("ApiKey {}", self.api_key))
            .send()
            .await
            .context("Failed to send GET request")?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .context("Failed to read response text")?;

        Ok((status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_slash() {
        let client = EsClient::new("https://es.example.com:9200/", "key").unwrap();
        assert_eq!(client.base_url(), "https://es.example.com:9200");
    }
}
