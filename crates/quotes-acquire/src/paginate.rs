use crate::error::ScrapeError;
use crate::fetch::PageSource;
use crate::parse;
use quotes_model::Quote;
use url::Url;

/// URL of listing page `page` (1-based) under `base`.
///
/// The path is absolute, so any path already on `base` is replaced.
pub fn page_url(base: &Url, page: usize) -> Result<Url, ScrapeError> {
    Ok(base.join(&format!("/page/{page}/"))?)
}

/// Quotes extracted from one listing page.
#[derive(Debug, Clone)]
pub struct PageBatch {
    pub page: usize,
    pub url: Url,
    pub quotes: Vec<Quote>,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fetching { page: usize },
    Done,
}

/// Walks listing pages one at a time until a page has no "next" link.
///
/// The total page count is unknown up front; each page is fetched, parsed,
/// and inspected before the next URL is built. Any error ends the walk.
pub struct Paginator<'a, S> {
    source: &'a S,
    base: Url,
    state: State,
    pages_visited: usize,
}

impl<'a, S: PageSource> Paginator<'a, S> {
    pub fn new(source: &'a S, base: Url) -> Self {
        Self {
            source,
            base,
            state: State::Fetching { page: 1 },
            pages_visited: 0,
        }
    }

    pub fn pages_visited(&self) -> usize {
        self.pages_visited
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Fetch and extract the next page, or `Ok(None)` once the last page
    /// has been returned.
    pub async fn next_page(&mut self) -> Result<Option<PageBatch>, ScrapeError> {
        let State::Fetching { page } = self.state else {
            return Ok(None);
        };

        match self.visit(page).await {
            Ok(batch) => {
                self.state = if batch.has_next {
                    State::Fetching { page: page + 1 }
                } else {
                    State::Done
                };
                Ok(Some(batch))
            }
            Err(e) => {
                self.state = State::Done;
                Err(e)
            }
        }
    }

    async fn visit(&mut self, page: usize) -> Result<PageBatch, ScrapeError> {
        let url = page_url(&self.base, page)?;
        tracing::debug!(page, url = %url, "Fetching listing page");

        let bytes = self.source.fetch(&url).await?;
        self.pages_visited += 1;

        let document = parse::parse_page(&bytes);
        let quotes = parse::extract_quotes(&document)?;
        let has_next = parse::has_next_page(&document);

        tracing::info!(page, quotes = quotes.len(), has_next, bytes = bytes.len(), "Parsed listing page");
        Ok(PageBatch { page, url, quotes, has_next })
    }
}
