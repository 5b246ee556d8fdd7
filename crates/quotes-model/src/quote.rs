use thiserror::Error;

/// One quote extracted from a listing page.
///
/// Values are built once from parsed HTML and never mutated afterwards.
/// `tags` keeps the order in which tag elements appear inside the quote
/// block; duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Errors raised when a delimited row cannot be turned back into a [`Quote`].
#[derive(Debug, Error)]
pub enum RowError {
    #[error("expected 3 fields (text, author, tags), found {0}")]
    FieldCount(usize),

    #[error("tags cell is not a JSON string array: {0}")]
    Tags(#[from] serde_json::Error),
}

/// Number of fields in a serialized quote row.
pub const ROW_FIELDS: usize = 3;

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// Flatten into the three output cells: text, author, encoded tags.
    pub fn to_row(&self) -> [String; ROW_FIELDS] {
        [
            self.text.clone(),
            self.author.clone(),
            encode_tags(&self.tags),
        ]
    }

    /// Rebuild a quote from the cells produced by [`Quote::to_row`].
    pub fn from_row<S: AsRef<str>>(fields: &[S]) -> Result<Self, RowError> {
        let [text, author, tags] = fields else {
            return Err(RowError::FieldCount(fields.len()));
        };
        Ok(Self {
            text: text.as_ref().to_string(),
            author: author.as_ref().to_string(),
            tags: decode_tags(tags.as_ref())?,
        })
    }
}

/// Encode a tag list as a single cell value.
///
/// The encoding is a compact JSON array of strings (`["love","life"]`, or
/// `[]` when there are no tags). It is deterministic, and any tag content
/// (commas, quotes, non-ASCII) survives [`decode_tags`] unchanged.
pub fn encode_tags(tags: &[String]) -> String {
    // A slice of strings always serializes; fall back to the empty array anyway.
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a cell produced by [`encode_tags`].
pub fn decode_tags(cell: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(cell)
}
