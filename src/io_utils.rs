//! Error presentation for the command line tools.
use std::fmt;
use std::io;
use std::path::Path;

use crate::error::HuffError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Input did not carry the expected archive extension.
pub fn extension_error(path: &Path, expected: &str) -> CliError {
    CliError {
        msg: format!(
            "Invalid file extension for '{}'. Expected .{}. Check the input file.",
            path.display(),
            expected
        ),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn huff_cli_error(path: &Path, err: HuffError) -> CliError {
    CliError {
        msg: format!("{}: {}", path.display(), cli_hint(path, &err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(path: &Path, err: &HuffError) -> String {
    match err {
        HuffError::NotFound { .. } => {
            format!("{err}. Check that the file exists and the path is correct.")
        }
        HuffError::AlreadyExists { .. } => {
            format!("{err}. Remove or rename it first; existing files are never overwritten.")
        }
        HuffError::InvalidArchive(msg) => {
            format!("not a valid archive ({msg}). Verify the file is intact.")
        }
        HuffError::InvalidInput(msg) => format!("{msg}."),
        HuffError::Io(io) => format_io_error("processing", path, io),
    }
}
