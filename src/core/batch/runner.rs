use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::time::{sleep, timeout};

use crate::core::{
    BatchConfig, CompanyRecord, FetchErrorKind, FetchFailure, PageOutcome, ScraperResult,
};
use crate::parser::{Extractor, RetrievedDocument};
use crate::scrapers::PageFetcher;
use crate::stats::StatsTracker;
use crate::storage::RecordSink;

/// Processes a URL list one entry at a time. Every URL yields exactly one
/// [`PageOutcome`], in input order, whether or not its page could be fetched.
pub struct BatchRunner {
    fetcher: Box<dyn PageFetcher>,
    extractor: Box<dyn Extractor>,
    config: BatchConfig,
    stats: Arc<StatsTracker>,
}

impl BatchRunner {
    pub fn new(
        fetcher: Box<dyn PageFetcher>,
        extractor: Box<dyn Extractor>,
        config: BatchConfig,
    ) -> Self {
        info!("Initializing batch runner");
        Self {
            fetcher,
            extractor,
            config,
            stats: Arc::new(StatsTracker::new()),
        }
    }

    pub fn stats(&self) -> Arc<StatsTracker> {
        Arc::clone(&self.stats)
    }

    pub async fn run(&self, urls: &[String]) -> ScraperResult<Vec<PageOutcome>> {
        self.execute(urls, None).await
    }

    /// Like [`run`](Self::run), but hands each outcome to `sink` as soon as
    /// its URL is done. A sink error stops the batch.
    pub async fn run_with_sink(
        &self,
        urls: &[String],
        sink: &mut dyn RecordSink,
    ) -> ScraperResult<Vec<PageOutcome>> {
        self.execute(urls, Some(sink)).await
    }

    async fn execute(
        &self,
        urls: &[String],
        mut sink: Option<&mut dyn RecordSink>,
    ) -> ScraperResult<Vec<PageOutcome>> {
        info!("Starting batch of {} URL(s)", urls.len());
        debug!(
            "Delay between requests: {:?}, request timeout: {:?}",
            self.config.delay, self.config.request_timeout
        );

        let mut outcomes = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            info!("Processing URL {}/{}: {}", index + 1, urls.len(), url);
            let outcome = self.process_url(url).await;

            if let Some(sink) = sink.as_deref_mut() {
                sink.store(&outcome)?;
            }
            outcomes.push(outcome);

            if index + 1 < urls.len() && !self.config.delay.is_zero() {
                sleep(self.config.delay).await;
            }
        }

        if let Some(sink) = sink.as_deref_mut() {
            sink.finish()?;
        }

        self.stats.finish();
        info!(
            "Batch completed. {} URL(s) processed, {} failed",
            outcomes.len(),
            outcomes.iter().filter(|o| o.is_failure()).count()
        );
        Ok(outcomes)
    }

    async fn process_url(&self, url: &str) -> PageOutcome {
        let mut record = CompanyRecord::new(url);
        let start_time = Utc::now();

        let fetched = match timeout(self.config.request_timeout, self.fetcher.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchFailure::new(url, FetchErrorKind::Timeout)),
        };

        let page = match fetched {
            Ok(page) => page,
            Err(failure) => {
                warn!("{}", failure);
                self.stats.record_failure(failure.kind.label());
                return PageOutcome::FetchFailed { record, failure };
            }
        };

        let duration = Utc::now().signed_duration_since(start_time);
        self.stats
            .record_fetch(page.status, page.body.len(), duration);
        debug!(
            "Fetched {} (status={}, content_type={:?})",
            url,
            page.status,
            page.content_type()
        );

        let document = RetrievedDocument::parse(&page);
        self.extractor.extract(&document, &mut record);
        self.stats.record_extraction(record.populated_fields());

        PageOutcome::Extracted(record)
    }
}
