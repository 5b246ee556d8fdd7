use quotes_model::QuoteSet;
use std::path::Path;
use url::Url;

pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod paginate;
pub mod parse;

pub use config::ScrapeConfig;
pub use error::ScrapeError;
pub use fetch::{HttpFetcher, PageSource};
pub use paginate::{PageBatch, Paginator};

/// Crawl every listing page under `base` and collect the quotes in page order.
///
/// `on_page` receives the page number and the quotes gathered so far, once
/// per page after that page's quotes have been appended.
/// The first fetch or extraction error aborts the crawl and discards
/// everything gathered so far.
pub async fn scrape_quotes<S, F>(source: &S, base: Url, mut on_page: F) -> Result<QuoteSet, ScrapeError>
where
    S: PageSource,
    F: FnMut(usize, &QuoteSet),
{
    let mut paginator = Paginator::new(source, base);
    let mut quotes = QuoteSet::new();

    while let Some(batch) = paginator.next_page().await? {
        quotes.extend_page(batch.quotes);
        on_page(batch.page, &quotes);
    }

    tracing::info!(pages = paginator.pages_visited(), quotes = quotes.len(), "Crawl complete");
    Ok(quotes)
}

/// Crawl the site, then write the full result set to `output` in one pass.
///
/// Nothing touches `output` unless the whole crawl succeeds.
pub async fn run<S, F>(source: &S, base: Url, output: &Path, on_page: F) -> Result<QuoteSet, ScrapeError>
where
    S: PageSource,
    F: FnMut(usize, &QuoteSet),
{
    let quotes = scrape_quotes(source, base, on_page).await?;
    output::write_quotes_to_path(output, &quotes)?;
    Ok(quotes)
}
