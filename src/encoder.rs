//! Compression: header, tree and sentinel-delimited payload.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::bits::BitWriter;
use crate::code_table::CodeTable;
use crate::compress_stats::CompressionStats;
use crate::error::{HuffError, Result};
use crate::freq::FrequencyTable;
use crate::header::ArchiveHeader;
use crate::path::source_extension;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;
use crate::tree_codec;

/// Encode everything in `source` into an archive written to `sink`.
///
/// The source is read twice: once to count symbols and once, after seeking
/// back to the start, to emit codes. The payload is framed by the sentinel's
/// code on both sides and the last byte is padded with the complement of the
/// sentinel code's first bit.
pub fn encode<R, W>(source: &mut R, extension: &str, mut sink: W) -> Result<CompressionStats>
where
    R: Read + Seek,
    W: Write,
{
    source.seek(SeekFrom::Start(0))?;
    let freq = FrequencyTable::from_reader(&mut *source)?;
    let tree = HuffmanTree::from_frequencies(&freq);
    let table = CodeTable::build(&tree);
    let header = ArchiveHeader::new(extension, tree_codec::serialize(&tree)?);

    header.write_to(&mut sink)?;

    let sentinel = table
        .get(Symbol::Sentinel)
        .ok_or_else(|| HuffError::InvalidInput("sentinel has no code".into()))?;
    let mut bits = BitWriter::new(sink);
    bits.write_bits(sentinel)?;

    source.seek(SeekFrom::Start(0))?;
    let mut buf = [0u8; 8192];
    let mut input_bytes = 0u64;
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            let code = table.get(Symbol::Byte(byte)).ok_or_else(|| {
                HuffError::InvalidInput(format!(
                    "byte {byte:#04x} appeared after the frequency pass; source changed while reading"
                ))
            })?;
            bits.write_bits(code)?;
        }
        input_bytes += n as u64;
    }
    if input_bytes != freq.total_bytes() {
        return Err(HuffError::InvalidInput(
            "source changed size while reading".into(),
        ));
    }

    bits.write_bits(sentinel)?;
    let payload_bits = bits.bits_written();
    bits.finish(!sentinel[0])?;

    let stats = CompressionStats {
        input_bytes,
        output_bytes: header.encoded_len() as u64 + payload_bits.div_ceil(8),
        alphabet_size: freq.alphabet_size(),
        tree_bytes: header.tree.len(),
    };
    log::debug!(
        "encoded {} bytes into {} ({} symbols, {} byte tree)",
        stats.input_bytes,
        stats.output_bytes,
        stats.alphabet_size,
        stats.tree_bytes
    );
    Ok(stats)
}

/// In-memory convenience wrapper around [`encode`].
pub fn encode_bytes(data: &[u8], extension: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode(&mut Cursor::new(data), extension, &mut out)?;
    Ok(out)
}

/// Compress the file at `input` into a new archive at `output`.
///
/// The original extension of `input` is stored in the header. `output` must
/// not exist; the archive is written to a temporary file beside it and only
/// moved into place once complete.
pub fn compress_file(input: &Path, output: &Path) -> Result<CompressionStats> {
    let source = open_source(input)?;
    if output.exists() {
        return Err(HuffError::AlreadyExists {
            path: output.to_path_buf(),
        });
    }

    let mut tmp = NamedTempFile::new_in(parent_dir(output))?;
    let stats = {
        let mut reader = BufReader::new(source);
        let writer = BufWriter::new(tmp.as_file_mut());
        encode(&mut reader, &source_extension(input), writer)?
    };
    persist(tmp, output)?;
    Ok(stats)
}

pub(crate) fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        log::debug!("cannot open {}: {e}", path.display());
        HuffError::NotFound {
            path: path.to_path_buf(),
        }
    })
}

pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Move a finished temporary file to `dest` without replacing anything.
pub(crate) fn persist(tmp: NamedTempFile, dest: &Path) -> Result<()> {
    tmp.persist_noclobber(dest).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            HuffError::AlreadyExists {
                path: dest.to_path_buf(),
            }
        } else {
            HuffError::Io(e.error)
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_layout() {
        let out = encode_bytes(&[], "").unwrap();
        // ext_len, tree_size=2, tree (1 + 0xff), payload: 0 0 then 1-padding
        assert_eq!(out, vec![0, 2, 0, 0xFF, 0x80, 0b0011_1111]);
    }

    #[test]
    fn aaaa_layout() {
        let out = encode_bytes(b"aaaa", "txt").unwrap();
        let header_len = 1 + 3 + 2 + 3;
        assert_eq!(&out[..4], &[3, b't', b'x', b't']);
        // sentinel=0, a=1: 0 1111 0 then padding with 1
        assert_eq!(&out[header_len..], &[0b0111_1011]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"she sells sea shells by the sea shore".repeat(20);
        assert_eq!(
            encode_bytes(&data, "txt").unwrap(),
            encode_bytes(&data, "txt").unwrap()
        );
    }

    #[test]
    fn stats_match_output() {
        let data = b"mississippi river".to_vec();
        let mut out = Vec::new();
        let stats = encode(&mut Cursor::new(&data), "md", &mut out).unwrap();
        assert_eq!(stats.input_bytes, data.len() as u64);
        assert_eq!(stats.output_bytes, out.len() as u64);
        assert_eq!(stats.alphabet_size, 9);
    }

    #[test]
    fn missing_source_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = compress_file(&dir.path().join("nope.txt"), &dir.path().join("nope.txt.huf"))
            .unwrap_err();
        assert!(matches!(err, HuffError::NotFound { .. }));
    }

    #[test]
    fn existing_destination_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.txt");
        let output = dir.path().join("a.txt.huf");
        std::fs::write(&input, b"hello").unwrap();
        std::fs::write(&output, b"keep me").unwrap();
        let err = compress_file(&input, &output).unwrap_err();
        assert!(matches!(err, HuffError::AlreadyExists { .. }));
        assert_eq!(std::fs::read(&output).unwrap(), b"keep me");
    }
}
