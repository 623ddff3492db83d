//! Error types shared by the reader, the psi calculator and the locus helper

use thiserror::Error;

/// Errors raised while reading junction tables or computing psi scores.
///
/// Missing or below-threshold read counts are not errors; they surface as
/// `None` in the derived columns instead.
#[derive(Debug, Error)]
pub enum SjError {
    /// Input line does not match the nine-column SJ.out.tab layout
    #[error("Schema error at line {line}: {message}")]
    Schema { line: usize, message: String },

    /// Threshold arguments out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Locus string not of the form chrom:start-stop
    #[error("Invalid locus '{0}': expected chrom:start-stop")]
    InvalidLocus(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SjError {
    pub(crate) fn schema(line: usize, message: impl Into<String>) -> Self {
        SjError::Schema {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SjError>;
