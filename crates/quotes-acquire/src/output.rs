use crate::error::ScrapeError;
use quotes_model::Quote;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Write quotes as CSV rows: text, author, tags.
///
/// No header row. The tags column holds the JSON array produced by
/// [`quotes_model::encode_tags`].
pub fn write_quotes<'q, W: Write>(
    writer: W,
    quotes: impl IntoIterator<Item = &'q Quote>,
) -> Result<usize, ScrapeError> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut rows = 0;
    for quote in quotes {
        csv.write_record(quote.to_row())?;
        rows += 1;
    }
    csv.flush()?;

    Ok(rows)
}

/// Write all quotes to `path`, replacing any existing file.
pub fn write_quotes_to_path<'q>(
    path: impl AsRef<Path>,
    quotes: impl IntoIterator<Item = &'q Quote>,
) -> Result<usize, ScrapeError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_quotes(file, quotes)?;
    tracing::info!(path = %path.display(), rows, "Wrote quotes CSV");
    Ok(rows)
}

/// Read a file produced by [`write_quotes`] back into quotes.
pub fn read_quotes<R: Read>(reader: R) -> Result<Vec<Quote>, ScrapeError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut quotes = Vec::new();
    for (line, record) in csv.records().enumerate() {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        let quote = Quote::from_row(&fields)
            .map_err(|source| ScrapeError::Row { line: line + 1, source })?;
        quotes.push(quote);
    }

    Ok(quotes)
}
