use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use super::PageFetcher;
use crate::core::{FetchErrorKind, FetchFailure};
use crate::http::FetchedPage;

#[derive(Clone, Debug)]
pub enum MockResponse {
    Page {
        status: u16,
        body: String,
        delay: Option<Duration>,
    },
    Failure(FetchErrorKind),
}

impl MockResponse {
    pub fn html(body: impl Into<String>) -> Self {
        MockResponse::Page {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        MockResponse::Page {
            status,
            body: String::new(),
            delay: None,
        }
    }

    pub fn failure(kind: FetchErrorKind) -> Self {
        MockResponse::Failure(kind)
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        match self {
            MockResponse::Page { status, body, .. } => MockResponse::Page {
                status,
                body,
                delay: Some(delay),
            },
            failure => failure,
        }
    }
}

/// In-memory fetcher keyed by URL. Unknown URLs fail like an unreachable
/// host. Every requested URL is recorded in call order.
#[derive(Clone, Default)]
pub struct MockScraper {
    responses: Arc<HashMap<String, MockResponse>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockScraper {
    pub fn new(responses: Vec<(&str, MockResponse)>) -> Self {
        Self {
            responses: Arc::new(
                responses
                    .into_iter()
                    .map(|(url, response)| (url.to_string(), response))
                    .collect(),
            ),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl PageFetcher for MockScraper {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchFailure> {
        self.requested.lock().push(url.to_string());

        let parsed = Url::parse(url).map_err(|e| FetchFailure::new(url, e.into()))?;

        match self.responses.get(url) {
            Some(MockResponse::Page {
                status,
                body,
                delay,
            }) => {
                if let Some(delay) = delay {
                    sleep(*delay).await;
                }
                if !(200..300).contains(status) {
                    return Err(FetchFailure::new(url, FetchErrorKind::Status(*status)));
                }
                Ok(FetchedPage::new(parsed, *status, body.clone()))
            }
            Some(MockResponse::Failure(kind)) => Err(FetchFailure::new(url, kind.clone())),
            None => Err(FetchFailure::new(
                url,
                FetchErrorKind::Transport(format!("no route to {}", url)),
            )),
        }
    }
}
