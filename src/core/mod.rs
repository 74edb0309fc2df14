pub mod batch;
pub mod config;
mod errors;
pub mod record;

pub use batch::BatchRunner;
pub use config::{BatchConfig, DEFAULT_USER_AGENT};
pub use errors::{FetchErrorKind, FetchFailure, ScraperError, ScraperResult};
pub use record::{CompanyField, CompanyRecord, PageOutcome};
