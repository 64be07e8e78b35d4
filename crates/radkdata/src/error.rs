//! radkdata error type.

use crate::codec::DecodeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not find {}", names.join(" or "))]
    FileNotFound { names: Vec<String> },
    #[error("Invalid EUC-JP on line {line}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error("Malformed line {line}: {message}")]
    Format { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub(crate) fn format(line: usize, message: impl ToString) -> Self {
        Self::Format {
            line,
            message: message.to_string(),
        }
    }
}
