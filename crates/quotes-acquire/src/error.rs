use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("quote block {index} has no {field} element")]
    Extraction { field: &'static str, index: usize },

    #[error("failed to write CSV: {0}")]
    Write(#[from] csv::Error),

    #[error("row {line}: {source}")]
    Row {
        line: usize,
        source: quotes_model::RowError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
