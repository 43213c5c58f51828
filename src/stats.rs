//! Per-batch success and failure counts, plus elapsed time formatting for the
//! command line front end.

use std::time::Duration;

use serde::Serialize;

use crate::batch::Action;
use crate::compress_stats::CompressionStats;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub to_archive: u64,
    pub archived: u64,
    pub to_extract: u64,
    pub extracted: u64,
    /// Bytes read by the successful operations.
    pub input_bytes: u64,
    /// Bytes written by the successful operations.
    pub output_bytes: u64,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: Action, outcome: Option<&CompressionStats>) {
        match action {
            Action::Compress => self.to_archive += 1,
            Action::Extract => self.to_extract += 1,
        }
        if let Some(stats) = outcome {
            match action {
                Action::Compress => self.archived += 1,
                Action::Extract => self.extracted += 1,
            }
            self.input_bytes += stats.input_bytes;
            self.output_bytes += stats.output_bytes;
        }
    }

    pub fn failed(&self) -> u64 {
        (self.to_archive - self.archived) + (self.to_extract - self.extracted)
    }

    /// One summary line per non-empty direction, e.g.
    /// `Files to archive: 3, Successfully: 2, Bad: 1.`
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (label, total, ok) in [
            ("archive", self.to_archive, self.archived),
            ("extract", self.to_extract, self.extracted),
        ] {
            if total == 0 {
                continue;
            }
            let mut line = format!("Files to {label}: {total}, Successfully: {ok}");
            if total != ok {
                line.push_str(&format!(", Bad: {}", total - ok));
            }
            line.push('.');
            lines.push(line);
        }
        lines
    }
}

/// Render `elapsed` as hours, minutes, seconds and milliseconds, leaving out
/// zero units.
pub fn format_elapsed(elapsed: Duration) -> String {
    let mut ms = elapsed.as_millis();
    let hours = ms / 3_600_000;
    ms -= hours * 3_600_000;
    let minutes = ms / 60_000;
    ms -= minutes * 60_000;
    let seconds = ms / 1000;
    ms -= seconds * 1000;

    let parts: Vec<String> = [
        (hours, "hours"),
        (minutes, "minutes"),
        (seconds, "seconds"),
        (ms, "milliseconds"),
    ]
    .iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, unit)| format!("{n} {unit}"))
    .collect();

    if parts.is_empty() {
        "0 milliseconds".to_string()
    } else {
        parts.join(" ")
    }
}
