use crate::error::ScrapeError;
use quotes_model::Quote;
use scraper::{ElementRef, Html, Selector};

const QUOTE_SELECTOR: &str = ".quote";
const TEXT_SELECTOR: &str = ".text";
const AUTHOR_SELECTOR: &str = ".author";
const TAG_SELECTOR: &str = ".tag";
const NEXT_SELECTOR: &str = ".next";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Parse raw page bytes into a queryable document.
///
/// Parsing is lenient: malformed markup still yields a tree, and invalid
/// UTF-8 sequences are replaced rather than rejected.
pub fn parse_page(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

/// Extract every quote block on the page, in document order.
pub fn extract_quotes(document: &Html) -> Result<Vec<Quote>, ScrapeError> {
    let quote_sel = selector(QUOTE_SELECTOR);
    document
        .select(&quote_sel)
        .enumerate()
        .map(|(index, block)| extract_quote(block, index))
        .collect()
}

/// Map one `.quote` block to a [`Quote`].
///
/// `index` is the block's position on the page and only used for error
/// reporting. A missing `.text` or `.author` element is an error; the target
/// site always renders both.
pub fn extract_quote(block: ElementRef<'_>, index: usize) -> Result<Quote, ScrapeError> {
    let text_sel = selector(TEXT_SELECTOR);
    let author_sel = selector(AUTHOR_SELECTOR);
    let tag_sel = selector(TAG_SELECTOR);

    let raw_text = block
        .select(&text_sel)
        .next()
        .map(element_text)
        .ok_or(ScrapeError::Extraction { field: "text", index })?;

    let author = block
        .select(&author_sel)
        .next()
        .map(element_text)
        .ok_or(ScrapeError::Extraction { field: "author", index })?;

    let tags = block.select(&tag_sel).map(element_text).collect();

    Ok(Quote {
        text: strip_decorative_quotes(&raw_text),
        author,
        tags,
    })
}

/// Whether the page carries a "next page" link.
pub fn has_next_page(document: &Html) -> bool {
    document.select(&selector(NEXT_SELECTOR)).next().is_some()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Drop exactly one leading and one trailing character.
///
/// The site wraps every quote in typographic quotation marks (“…”). Only
/// those two characters go; surrounding whitespace is left alone. Inputs
/// shorter than two characters come back empty.
pub fn strip_decorative_quotes(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}
