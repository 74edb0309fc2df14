use scraper::Html;
use url::Url;

use crate::core::CompanyRecord;
use crate::http::FetchedPage;

/// Parsed form of one fetched page. Lives only while its URL is processed.
pub struct RetrievedDocument {
    pub url: Url,
    pub html: Html,
}

impl RetrievedDocument {
    pub fn parse(page: &FetchedPage) -> Self {
        Self {
            url: page.url.clone(),
            html: Html::parse_document(&page.body),
        }
    }
}

/// Fills the fields of a record from a document. Fields that cannot be
/// found are left untouched; extraction never fails.
pub trait Extractor: Send + Sync {
    fn extract(&self, document: &RetrievedDocument, record: &mut CompanyRecord);
}
