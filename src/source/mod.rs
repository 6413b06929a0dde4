//! Dataset sources and load errors.

/// Delimited-file source.
pub mod csv;
/// In-memory source.
pub mod memory;

use std::fmt;

use arrow::error::ArrowError;

use crate::record::Dataset;

/// Failure to read or parse a dataset from its source.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    Io(std::io::Error),
    /// The delimited-text parser rejected the content.
    Csv(ArrowError),
    /// The source had no header row.
    MissingHeader,
    /// A data row did not have one cell per header field.
    RowWidth {
        /// 1-based line, header included.
        line: usize,
        /// Header width.
        expected: usize,
        /// Cells found on the row.
        found: usize,
    },
    /// Any other malformed content.
    Message(String),
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ArrowError> for LoadError {
    fn from(value: ArrowError) -> Self {
        match value {
            ArrowError::IoError(_, err) => Self::Io(err),
            other => Self::Csv(other),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Csv(err) => write!(f, "csv error: {err}"),
            Self::MissingHeader => f.write_str("source has no header row"),
            Self::RowWidth {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} fields, found {found}"),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of a load attempt.
pub type LoadResult<T> = Result<T, LoadError>;

/// Produces the dataset a [`crate::core::store::RecordStore`] serves.
///
/// `load` may be called more than once if earlier calls failed; it must build
/// the dataset from scratch each time.
pub trait RecordSource: Send + Sync {
    /// Reads and parses the full dataset.
    fn load(&self) -> LoadResult<Dataset>;

    /// Short description used in log output.
    fn describe(&self) -> String {
        String::from("record source")
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn load(&self) -> LoadResult<Dataset> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: RecordSource + ?Sized> RecordSource for std::sync::Arc<S> {
    fn load(&self) -> LoadResult<Dataset> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
