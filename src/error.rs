//! Error module
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{}", kind)]
/// The error type for chunked query building and execution.
pub struct Error {
    kind: ErrorKind,
    original_code: Option<String>,
    original_message: Option<String>,
}

/// Builds an [`Error`], optionally carrying the code and message the
/// underlying data source reported. Available to [`Filterable`]
/// implementations for surfacing their own failures.
///
/// [`Filterable`]: crate::connector::Filterable
pub struct ErrorBuilder {
    kind: ErrorKind,
    original_code: Option<String>,
    original_message: Option<String>,
}

impl ErrorBuilder {
    pub fn set_original_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.original_code = Some(code.into());
        self
    }

    pub fn set_original_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.original_message = Some(message.into());
        self
    }

    pub fn build(self) -> Error {
        Error {
            kind: self.kind,
            original_code: self.original_code,
            original_message: self.original_message,
        }
    }
}

impl Error {
    pub fn builder(kind: ErrorKind) -> ErrorBuilder {
        ErrorBuilder {
            kind,
            original_code: None,
            original_message: None,
        }
    }

    /// The error code sent by the data source, if available.
    pub fn original_code(&self) -> Option<&str> {
        self.original_code.as_deref()
    }

    /// The original error message sent by the data source, if available.
    pub fn original_message(&self) -> Option<&str> {
        self.original_message.as_deref()
    }

    /// A more specific error type for matching.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A failure in the data source while executing a query. The variant
    /// `Filterable` implementations are expected to use.
    #[error("Error querying the data source: {}", _0)]
    QueryError(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The maximum chunk size must allow at least one value per chunk.
    #[error("Invalid maximum chunk size, must be positive: {}", _0)]
    InvalidChunkSize(usize),

    /// The field selector is not a shape the data source's translation layer
    /// can encode into its query language.
    #[error("Unsupported selector shape: {}", _0)]
    UnsupportedSelector(&'static str),

    /// A chunk's query failed; carries the index of the chunk in submission
    /// order and the failure the source reported.
    #[error("Error executing the query for chunk {}: {}", chunk, source)]
    ChunkQueryError { chunk: usize, source: Box<Error> },
}

impl From<Error> for ErrorKind {
    fn from(e: Error) -> Self {
        e.kind
    }
}
