//! Archive header: original extension followed by the serialized tree.
//!
//! ```text
//! [ext_len: u8][ext: ext_len bytes][tree_size: u16 LE][tree: tree_size bytes]
//! ```
//!
//! The payload bitstream starts immediately after the tree.

use std::io::{self, Read, Write};

use crate::error::{HuffError, Result};
use crate::tree_codec::MAX_TREE_SIZE;

/// Characters never allowed in a stored extension, since it becomes part of
/// the extracted file name.
const FORBIDDEN: &[char] = &['/', '\\', '\0'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// Extension of the original file, without the leading dot.
    pub extension: String,
    /// Level-order serialized tree.
    pub tree: Vec<u8>,
}

impl ArchiveHeader {
    pub fn new(extension: impl Into<String>, tree: Vec<u8>) -> Self {
        Self {
            extension: extension.into(),
            tree,
        }
    }

    /// Encoded length in bytes.
    pub fn encoded_len(&self) -> usize {
        1 + self.extension.len() + 2 + self.tree.len()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let ext = self.extension.as_bytes();
        let ext_len = u8::try_from(ext.len()).map_err(|_| {
            HuffError::InvalidInput(format!(
                "extension is {} bytes, at most 255 fit in the header",
                ext.len()
            ))
        })?;
        if self.extension.contains(FORBIDDEN) {
            return Err(HuffError::InvalidInput(
                "extension contains a path separator".into(),
            ));
        }
        if self.tree.len() > MAX_TREE_SIZE {
            return Err(HuffError::InvalidInput(format!(
                "tree is {} bytes, at most {MAX_TREE_SIZE} fit in the header",
                self.tree.len()
            )));
        }
        writer.write_all(&[ext_len])?;
        writer.write_all(ext)?;
        writer.write_all(&(self.tree.len() as u16).to_le_bytes())?;
        writer.write_all(&self.tree)?;
        Ok(())
    }

    /// Parse a header. A declared tree size above [`MAX_TREE_SIZE`] is
    /// rejected before any tree byte is read.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut len = [0u8; 1];
        read_field(reader, &mut len, "extension length")?;

        let mut ext = vec![0u8; len[0] as usize];
        read_field(reader, &mut ext, "extension")?;
        let extension = String::from_utf8(ext)
            .map_err(|_| HuffError::invalid_archive("extension is not valid text"))?;
        if extension.contains(FORBIDDEN) {
            return Err(HuffError::invalid_archive(
                "extension contains a path separator",
            ));
        }

        let mut size = [0u8; 2];
        read_field(reader, &mut size, "tree size")?;
        let tree_size = u16::from_le_bytes(size) as usize;
        if tree_size > MAX_TREE_SIZE {
            return Err(HuffError::invalid_archive(format!(
                "tree size {tree_size} exceeds {MAX_TREE_SIZE}"
            )));
        }

        let mut tree = vec![0u8; tree_size];
        read_field(reader, &mut tree, "tree")?;
        Ok(Self { extension, tree })
    }
}

fn read_field<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            HuffError::invalid_archive(format!("header is truncated in the {what}"))
        }
        _ => HuffError::Io(e),
    })
}
