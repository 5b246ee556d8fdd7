use crate::quote::Quote;

/// All quotes gathered in one run, in page order.
///
/// Pages are appended whole via [`QuoteSet::extend_page`]; the set is handed
/// to the writer once the crawl finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSet {
    quotes: Vec<Quote>,
}

impl QuoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's quotes, keeping their on-page order.
    pub fn extend_page(&mut self, page: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(page);
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn into_inner(self) -> Vec<Quote> {
        self.quotes
    }
}

impl<'a> IntoIterator for &'a QuoteSet {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_append_in_order() {
        let mut set = QuoteSet::new();
        assert!(set.is_empty());

        set.extend_page(vec![
            Quote::new("one", "A", vec![]),
            Quote::new("two", "B", vec![]),
        ]);
        set.extend_page(vec![Quote::new("three", "C", vec!["x".into()])]);

        let texts: Vec<&str> = set.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert_eq!(set.len(), 3);
    }
}
