pub mod core;
pub mod http;
pub mod parser;
pub mod scrapers;
pub mod stats;
pub mod storage;

pub use crate::core::BatchRunner;
pub use crate::core::{
    BatchConfig, CompanyField, CompanyRecord, FetchErrorKind, FetchFailure, PageOutcome,
    ScraperError, ScraperResult,
};
pub use http::FetchedPage;
pub use parser::{CompanyExtractor, Extractor, LabelMatching, RetrievedDocument};
pub use scrapers::{HttpScraper, PageFetcher};
pub use stats::StatsTracker;
pub use storage::{CsvStorage, RecordSink};
