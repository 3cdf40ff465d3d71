//! Errors raised while assembling records through generated builders.

const UNINITIALIZED_PREFIX: &str = "Field not initialized: ";

/// Why a builder refused to produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A field without a default was never set
    #[display("Field '{}' was never set", _0)]
    Uninitialized(String),

    /// The builder rejected the assembled values
    #[display("Record rejected: {}", _0)]
    Rejected(String),
}

/// Builder error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

/// Convert from a derive_builder error message.
///
/// ```
/// use tessera_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::from("Field not initialized: host".to_string());
/// assert_eq!(err.kind(), &BuilderErrorKind::Uninitialized("host".into()));
/// ```
impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        let kind = match msg.strip_prefix(UNINITIALIZED_PREFIX) {
            Some(field) => BuilderErrorKind::Uninitialized(field.trim().to_string()),
            None => BuilderErrorKind::Rejected(msg),
        };
        Self::new(kind)
    }
}

impl From<&str> for BuilderError {
    #[track_caller]
    fn from(msg: &str) -> Self {
        Self::from(msg.to_string())
    }
}
