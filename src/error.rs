use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`HuffError`], used by callers that only need
/// to decide how to report or count a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArchive,
    InvalidInput,
    Io,
}

#[derive(Error, Debug)]
pub enum HuffError {
    /// Source path could not be opened for reading.
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Destination path is already present; nothing was written.
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// Archive header, tree or payload failed validation.
    #[error("not a valid archive: {0}")]
    InvalidArchive(String),

    /// Caller supplied something the format cannot represent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HuffError::NotFound { .. } => ErrorKind::NotFound,
            HuffError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            HuffError::InvalidArchive(_) => ErrorKind::InvalidArchive,
            HuffError::InvalidInput(_) => ErrorKind::InvalidInput,
            HuffError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_archive(msg: impl Into<String>) -> Self {
        HuffError::InvalidArchive(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;
