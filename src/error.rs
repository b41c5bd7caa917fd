//! Error types returned by the readers.

/// The overall shape of a record could not be recovered from its input.
///
/// Only the fixed-shape formats (`loadavg`, `uptime`) and the anchored
/// `/proc/[pid]/stat` split produce this. Per-field failures in the other
/// formats resolve to zero instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Wrong number of whitespace-delimited tokens.
    #[error("{record}: expected {expected} fields, got {actual}")]
    FieldCount {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A token that must be numeric was not.
    #[error("{record}: invalid {field} value {value:?}")]
    InvalidValue {
        record: &'static str,
        field: &'static str,
        value: String,
    },

    /// The line does not look like `pid (comm) rest`.
    #[error("{record}: line does not match the `pid (comm) fields...` layout")]
    Layout { record: &'static str },
}

/// Error returned by every `read_*` entry point.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The byte source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ReadError {
    /// Returns the format error, if this is one.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            ReadError::Format(e) => Some(e),
            ReadError::Io(_) => None,
        }
    }
}
