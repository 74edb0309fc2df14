use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ScrapingStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_urls: usize,
    pub fetched_pages: usize,
    pub failed_fetches: usize,
    /// Fetched pages on which no rule matched anything.
    pub empty_extractions: usize,
    pub bytes_downloaded: usize,
    pub status_codes: HashMap<u16, usize>,
    pub failure_reasons: HashMap<String, usize>,
    pub average_response_time: f64, // in milliseconds
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<ScrapingStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(ScrapingStats {
                start_time: Utc::now(),
                end_time: None,
                total_urls: 0,
                fetched_pages: 0,
                failed_fetches: 0,
                empty_extractions: 0,
                bytes_downloaded: 0,
                status_codes: HashMap::new(),
                failure_reasons: HashMap::new(),
                average_response_time: 0.0,
            })),
        }
    }

    pub fn record_fetch(&self, status: u16, size: usize, duration: Duration) {
        let mut stats = self.stats.write();
        stats.total_urls += 1;
        stats.fetched_pages += 1;
        *stats.status_codes.entry(status).or_insert(0) += 1;
        stats.bytes_downloaded += size;

        let current_total = stats.average_response_time * (stats.fetched_pages - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_response_time = (current_total + new_duration) / stats.fetched_pages as f64;
    }

    pub fn record_failure(&self, reason: String) {
        let mut stats = self.stats.write();
        stats.total_urls += 1;
        stats.failed_fetches += 1;
        *stats.failure_reasons.entry(reason).or_insert(0) += 1;
    }

    pub fn record_extraction(&self, populated_fields: usize) {
        if populated_fields == 0 {
            self.stats.write().empty_extractions += 1;
        }
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn get_stats(&self) -> ScrapingStats {
        self.stats.read().clone()
    }

    pub fn print_summary(&self) {
        let stats = self.stats.read();
        let duration = stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time);

        println!("\nScraping Statistics:");
        println!("===================");
        println!("Duration: {} seconds", duration.num_seconds());
        println!("URLs Processed: {}", stats.total_urls);
        println!("Pages Fetched: {}", stats.fetched_pages);
        println!("Failed Fetches: {}", stats.failed_fetches);
        println!("Pages Without Data: {}", stats.empty_extractions);
        println!(
            "Data Downloaded: {:.2} MB",
            stats.bytes_downloaded as f64 / 1_000_000.0
        );
        println!(
            "Average Response Time: {:.2}ms",
            stats.average_response_time
        );

        println!("\nStatus Codes:");
        for (code, count) in &stats.status_codes {
            println!("  {}: {}", code, count);
        }

        if !stats.failure_reasons.is_empty() {
            println!("\nFailure Reasons:");
            for (reason, count) in &stats.failure_reasons {
                println!("  {}: {}", reason, count);
            }
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_fetches_and_failures() {
        let tracker = StatsTracker::new();
        tracker.record_fetch(200, 1_000, Duration::milliseconds(100));
        tracker.record_fetch(200, 3_000, Duration::milliseconds(300));
        tracker.record_failure("status_404".to_string());
        tracker.record_failure("timeout".to_string());
        tracker.record_failure("timeout".to_string());
        tracker.record_extraction(0);
        tracker.record_extraction(4);
        tracker.finish();

        let stats = tracker.get_stats();
        assert_eq!(stats.total_urls, 5);
        assert_eq!(stats.fetched_pages, 2);
        assert_eq!(stats.failed_fetches, 3);
        assert_eq!(stats.empty_extractions, 1);
        assert_eq!(stats.bytes_downloaded, 4_000);
        assert_eq!(stats.status_codes.get(&200), Some(&2));
        assert_eq!(stats.failure_reasons.get("timeout"), Some(&2));
        assert!((stats.average_response_time - 200.0).abs() < f64::EPSILON);
        assert!(stats.end_time.is_some());
    }
}
