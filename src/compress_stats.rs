use serde::Serialize;

/// Figures for one finished compress or extract operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    /// Bytes consumed from the source.
    pub input_bytes: u64,
    /// Bytes written to the destination.
    pub output_bytes: u64,
    /// Distinct symbols in the tree, sentinel included.
    pub alphabet_size: usize,
    /// Size of the serialized tree in the header.
    pub tree_bytes: usize,
}

impl CompressionStats {
    /// Output size as a percentage of input size. Empty input reports 0.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 * 100.0 / self.input_bytes as f64
        }
    }
}
