//! Static Huffman file archiver.
//!
//! An archive stores the original file extension and the level-order encoded
//! Huffman tree in its header, followed by a payload framed by an
//! end-of-stream sentinel on both sides:
//!
//! ```text
//! [ext_len u8][ext][tree_size u16 LE][tree][SENTINEL][codes...][SENTINEL][pad]
//! ```
//!
//! ```
//! let archive = huffarc::compress(b"abracadabra", "txt").unwrap();
//! let (ext, data) = huffarc::decompress(&archive).unwrap();
//! assert_eq!(ext, "txt");
//! assert_eq!(data, b"abracadabra");
//! ```

pub mod batch;
pub mod bits;
pub mod code_table;
pub mod compress_stats;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod freq;
pub mod header;
pub mod io_utils;
pub mod path;
pub mod stats;
pub mod symbol;
pub mod tree;
pub mod tree_codec;

pub use batch::{run_batch, toggle, Action, FileOutcome};
pub use code_table::CodeTable;
pub use compress_stats::CompressionStats;
pub use config::Config;
pub use decoder::{decode, extract_file, Decoder};
pub use encoder::{compress_file, encode};
pub use error::{ErrorKind, HuffError, Result};
pub use freq::FrequencyTable;
pub use header::ArchiveHeader;
pub use stats::BatchStats;
pub use symbol::Symbol;
pub use tree::{HuffmanTree, Node, NodeId};
pub use tree_codec::MAX_TREE_SIZE;

/// Compress `data` in memory, recording `extension` in the header.
pub fn compress(data: &[u8], extension: &str) -> Result<Vec<u8>> {
    encoder::encode_bytes(data, extension)
}

/// Restore an in-memory archive. Returns the stored extension and the
/// original bytes.
pub fn decompress(archive: &[u8]) -> Result<(String, Vec<u8>)> {
    decoder::decode_bytes(archive)
}
