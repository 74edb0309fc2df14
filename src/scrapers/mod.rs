mod fetcher;
pub mod http_scraper;
pub mod mock_scraper;

pub use fetcher::PageFetcher;
pub use http_scraper::HttpScraper;
pub use mock_scraper::{MockResponse, MockScraper};
