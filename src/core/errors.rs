use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type ScraperResult<T> = Result<T, ScraperError>;

/// Why a single page could not be retrieved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP client error: {0}")]
    Transport(String),

    #[error("unexpected status code {0}")]
    Status(u16),
}

impl FetchErrorKind {
    /// Short label used to group failures in the run statistics.
    pub fn label(&self) -> String {
        match self {
            FetchErrorKind::InvalidUrl(_) => "invalid_url".to_string(),
            FetchErrorKind::Timeout => "timeout".to_string(),
            FetchErrorKind::Transport(_) => "transport".to_string(),
            FetchErrorKind::Status(code) => format!("status_{}", code),
        }
    }
}

impl From<reqwest::Error> for FetchErrorKind {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchErrorKind::Timeout
        } else if let Some(status) = err.status() {
            FetchErrorKind::Status(status.as_u16())
        } else {
            FetchErrorKind::Transport(err.to_string())
        }
    }
}

/// Recoverable, per-URL failure. Never aborts a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error fetching URL {url}: {kind}")]
pub struct FetchFailure {
    pub url: String,
    #[source]
    pub kind: FetchErrorKind,
}

impl FetchFailure {
    pub fn new(url: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}
