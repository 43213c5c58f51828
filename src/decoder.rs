//! Decompression: header parse, tree rebuild and payload walk.

use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::bits::BitReader;
use crate::compress_stats::CompressionStats;
use crate::config::Config;
use crate::encoder::{open_source, parent_dir, persist};
use crate::error::{HuffError, Result};
use crate::header::ArchiveHeader;
use crate::path::extracted_path;
use crate::symbol::{Symbol, SENTINEL_PAYLOAD};
use crate::tree::{HuffmanTree, Node};
use crate::tree_codec;

/// Payload decoder for one archive, built from its header.
#[derive(Debug)]
pub struct Decoder {
    header: ArchiveHeader,
    tree: HuffmanTree,
    flush_batch: usize,
}

impl Decoder {
    /// Rebuild the tree stored in `header`. Fails with
    /// [`HuffError::InvalidArchive`] if the tree is empty or truncated.
    pub fn new(header: ArchiveHeader, config: &Config) -> Result<Self> {
        let tree = tree_codec::deserialize(&header.tree)?;
        Ok(Self {
            header,
            tree,
            flush_batch: config.flush_batch.max(1),
        })
    }

    pub fn header(&self) -> &ArchiveHeader {
        &self.header
    }

    /// Walk the payload from `source`, writing decoded bytes to `sink` in
    /// batches of `flush_batch`.
    ///
    /// The first leaf reached must carry the sentinel payload; that leaf is
    /// the sentinel from then on. Reaching it again ends the payload and any
    /// remaining bits are ignored.
    pub fn decode_payload<R: Read, W: Write>(
        mut self,
        source: R,
        mut sink: W,
    ) -> Result<CompressionStats> {
        let root = self.tree.root();
        let mut bits = BitReader::new(source);
        let mut node = root;
        let mut started = false;
        let mut pending: Vec<u8> = Vec::with_capacity(self.flush_batch);
        let mut written = 0u64;

        loop {
            let Some(bit) = bits.read_bit()? else {
                return Err(HuffError::invalid_archive(if started {
                    "payload ends before the end-of-stream marker"
                } else {
                    "payload is empty"
                }));
            };
            node = self.tree.step(node, bit);
            let Node::Leaf { symbol, .. } = *self.tree.node(node) else {
                continue;
            };

            if !started {
                if symbol.payload() != SENTINEL_PAYLOAD {
                    return Err(HuffError::invalid_archive(
                        "payload does not start with the end-of-stream marker",
                    ));
                }
                self.tree.set_symbol(node, Symbol::Sentinel);
                started = true;
            } else {
                match symbol {
                    Symbol::Sentinel => break,
                    Symbol::Byte(b) => {
                        pending.push(b);
                        if pending.len() >= self.flush_batch {
                            sink.write_all(&pending)?;
                            written += pending.len() as u64;
                            pending.clear();
                        }
                    }
                }
            }
            node = root;
        }

        sink.write_all(&pending)?;
        written += pending.len() as u64;
        sink.flush()?;

        let stats = CompressionStats {
            input_bytes: self.header.encoded_len() as u64 + bits.bits_read().div_ceil(8),
            output_bytes: written,
            alphabet_size: self.tree.leaf_count(),
            tree_bytes: self.header.tree.len(),
        };
        log::debug!(
            "decoded {} payload bits into {} bytes",
            bits.bits_read(),
            stats.output_bytes
        );
        Ok(stats)
    }
}

/// Decode a whole archive from `source` into `sink`, returning the header
/// (for its stored extension) and the operation's figures.
pub fn decode<R: Read, W: Write>(
    mut source: R,
    sink: W,
    config: &Config,
) -> Result<(ArchiveHeader, CompressionStats)> {
    let header = ArchiveHeader::read_from(&mut source)?;
    let decoder = Decoder::new(header.clone(), config)?;
    let stats = decoder.decode_payload(source, sink)?;
    Ok((header, stats))
}

/// In-memory convenience wrapper around [`decode`]. Returns the stored
/// extension and the restored bytes.
pub fn decode_bytes(archive: &[u8]) -> Result<(String, Vec<u8>)> {
    let mut out = Vec::new();
    let (header, _) = decode(archive, &mut out, &Config::default())?;
    Ok((header.extension, out))
}

/// Extract the archive at `input`.
///
/// The destination is `output` if given, otherwise it is derived from the
/// archive name and the stored extension. Header and tree are validated
/// before the destination is considered; an existing destination is never
/// replaced. Decoded bytes go to a temporary file that is moved into place
/// only after the end-of-stream marker has been read.
pub fn extract_file(
    input: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<(PathBuf, CompressionStats)> {
    let mut source = BufReader::new(open_source(input)?);
    let header = ArchiveHeader::read_from(&mut source)?;
    let dest = match output {
        Some(p) => p.to_path_buf(),
        None => extracted_path(input, &header.extension),
    };
    let decoder = Decoder::new(header, config)?;
    if dest.exists() {
        return Err(HuffError::AlreadyExists { path: dest });
    }

    let mut tmp = NamedTempFile::new_in(parent_dir(&dest))?;
    let stats = decoder.decode_payload(source, BufWriter::new(tmp.as_file_mut()))?;
    persist(tmp, &dest)?;
    Ok((dest, stats))
}
