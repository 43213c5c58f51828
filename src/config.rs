/// Runtime configuration for the encoder and decoder.
///
/// Built once by the caller and passed to each operation; nothing here is
/// shared between operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decoded bytes buffered before each write to the destination.
    pub flush_batch: usize,
    /// Extension appended to compressed files, without the dot.
    pub archive_extension: String,
}

/// Default decoder flush batch in bytes.
pub const DEFAULT_FLUSH_BATCH: usize = 512;

/// Default archive extension.
pub const ARCHIVE_EXTENSION: &str = "huf";

impl Default for Config {
    fn default() -> Self {
        Self {
            flush_batch: DEFAULT_FLUSH_BATCH,
            archive_extension: ARCHIVE_EXTENSION.to_string(),
        }
    }
}

impl Config {
    pub fn with_flush_batch(mut self, flush_batch: usize) -> Self {
        self.flush_batch = flush_batch.max(1);
        self
    }
}
