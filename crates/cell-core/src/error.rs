//! Error types for cell stream parsing.

use thiserror::Error;

/// Result type for cell parsing operations.
pub type Result<T> = std::result::Result<T, CellError>;

/// Errors raised while reading a cell stream.
///
/// There are exactly two kinds. Neither is recoverable: the first error
/// aborts the whole scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    /// A field could not be converted to the expected type, or the data
    /// uses an encoding this loader does not support (matrix-form geometry).
    #[error("incorrect format at line {line}: {message}")]
    IncorrectFormat { message: String, line: usize },

    /// A field was well-formed but out of range or semantically invalid, the
    /// stream ended early or failed, or a cell type code is not supported.
    #[error("parsing error at line {line}: {message}")]
    Parsing { message: String, line: usize },
}

impl CellError {
    /// Create an incorrect-format error.
    pub fn incorrect_format(line: usize, message: impl Into<String>) -> Self {
        Self::IncorrectFormat {
            message: message.into(),
            line,
        }
    }

    /// Create a parsing error.
    pub fn parsing(line: usize, message: impl Into<String>) -> Self {
        Self::Parsing {
            message: message.into(),
            line,
        }
    }

    /// Line of the stream on which the error was detected (1-based, 0 if
    /// nothing had been read yet).
    pub fn line(&self) -> usize {
        match self {
            Self::IncorrectFormat { line, .. } | Self::Parsing { line, .. } => *line,
        }
    }

    /// Human-readable description, without the line number.
    pub fn message(&self) -> &str {
        match self {
            Self::IncorrectFormat { message, .. } | Self::Parsing { message, .. } => message,
        }
    }

    /// Whether the stream is not cell data at all.
    pub fn is_incorrect_format(&self) -> bool {
        matches!(self, Self::IncorrectFormat { .. })
    }

    /// Whether the stream is cell data that could not be read.
    pub fn is_parsing(&self) -> bool {
        matches!(self, Self::Parsing { .. })
    }
}
