//! Content catalog error types.

/// Kinds of content catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContentErrorKind {
    /// Failed to read a catalog file
    #[display("Failed to read catalog: {}", _0)]
    FileRead(String),
    /// Failed to parse catalog TOML
    #[display("Failed to parse catalog: {}", _0)]
    Parse(String),
    /// Two records of the same collection share an id
    #[display("Duplicate {} id: {}", collection, id)]
    DuplicateId {
        /// Collection name (articles, faqs, ...)
        collection: String,
        /// The repeated identifier
        id: String,
    },
    /// No record with the given id or slug
    #[display("{} not found: {}", collection, id)]
    NotFound {
        /// Collection name (articles, faqs, ...)
        collection: String,
        /// The identifier that was looked up
        id: String,
    },
}

/// Content catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use tessera_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::NotFound {
///     collection: "articles".to_string(),
///     id: "42".to_string(),
/// });
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", kind, line, file)]
pub struct ContentError {
    /// The kind of error that occurred
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new content error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a missing record.
    #[track_caller]
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(ContentErrorKind::NotFound {
            collection: collection.into(),
            id: id.into(),
        })
    }

    /// Whether this error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ContentErrorKind::NotFound { .. })
    }
}
