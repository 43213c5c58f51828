//! Multi-file processing: each path is compressed or extracted depending on
//! its extension, one after another. A failure is recorded and the batch
//! moves on.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::compress_stats::CompressionStats;
use crate::config::Config;
use crate::decoder::extract_file;
use crate::encoder::compress_file;
use crate::error::Result;
use crate::path::{archive_path, is_archive};
use crate::stats::BatchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Compress,
    Extract,
}

/// Result of processing one path.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub action: Action,
    pub result: Result<(PathBuf, CompressionStats)>,
}

/// Compress `path` unless it is an archive, in which case extract it.
pub fn toggle(path: &Path, config: &Config) -> FileOutcome {
    let (action, result) = if is_archive(path, &config.archive_extension) {
        (Action::Extract, extract_file(path, None, config))
    } else {
        let output = archive_path(path, &config.archive_extension);
        (
            Action::Compress,
            compress_file(path, &output).map(|stats| (output, stats)),
        )
    };
    FileOutcome {
        input: path.to_path_buf(),
        action,
        result,
    }
}

/// Toggle every path in order. `on_done` sees each outcome as soon as it is
/// known, before the next file starts.
pub fn run_batch<P, F>(paths: &[P], config: &Config, mut on_done: F) -> BatchStats
where
    P: AsRef<Path>,
    F: FnMut(&FileOutcome),
{
    let mut stats = BatchStats::new();
    for path in paths {
        let outcome = toggle(path.as_ref(), config);
        if let Err(e) = &outcome.result {
            log::debug!("{}: {e}", outcome.input.display());
        }
        stats.record(
            outcome.action,
            outcome.result.as_ref().ok().map(|(_, s)| s),
        );
        on_done(&outcome);
    }
    stats
}
