use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use url::Url;

use super::PageFetcher;
use crate::core::{BatchConfig, FetchErrorKind, FetchFailure, ScraperResult};
use crate::http::FetchedPage;

#[derive(Clone)]
pub struct HttpScraper {
    client: Client,
}

impl HttpScraper {
    pub fn new() -> ScraperResult<Self> {
        Self::with_config(&BatchConfig::default())
    }

    /// Builds a client that identifies itself with the configured user agent
    /// and gives up on a request after `request_timeout`.
    pub fn with_config(config: &BatchConfig) -> ScraperResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

#[async_trait]
impl PageFetcher for HttpScraper {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchFailure> {
        let fail = |kind: FetchErrorKind| FetchFailure::new(url, kind);

        let parsed = Url::parse(url).map_err(|e| fail(e.into()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(FetchErrorKind::Status(status.as_u16())));
        }

        let final_url = response.url().clone();
        let headers = Self::extract_headers(&response);
        let raw_body = response.bytes().await.map_err(|e| fail(e.into()))?;
        let body = String::from_utf8_lossy(&raw_body).into_owned();

        debug!(
            "Received response: url={}, status={}, body_length={}",
            final_url,
            status.as_u16(),
            raw_body.len()
        );

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
