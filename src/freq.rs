use std::io::Read;

use crate::error::Result;
use crate::symbol::{Symbol, ALPHABET_SIZE};

/// Occurrence counts for every symbol of one input.
///
/// The sentinel always has a count of one, so the table is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    fn with_sentinel() -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        counts[Symbol::Sentinel.index()] = 1;
        Self { counts }
    }

    /// Scan `reader` to its end, counting every byte.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut table = Self::with_sentinel();
        let mut buf = [0u8; 8192];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            table.add_bytes(&buf[..n]);
        }
        Ok(table)
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::with_sentinel();
        table.add_bytes(data);
        table
    }

    fn add_bytes(&mut self, data: &[u8]) {
        for &b in data {
            self.counts[b as usize] += 1;
        }
    }

    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// Symbols with a non-zero count, in index order (bytes ascending, then
    /// the sentinel).
    pub fn present(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .filter_map(|(i, &c)| Symbol::from_index(i).map(|s| (s, c)))
    }

    /// Number of distinct symbols present, sentinel included.
    pub fn alphabet_size(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Number of data bytes counted (sentinel excluded).
    pub fn total_bytes(&self) -> u64 {
        self.counts[..ALPHABET_SIZE - 1].iter().sum()
    }
}
