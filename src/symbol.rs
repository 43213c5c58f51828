//! Symbol alphabet: the 256 byte values plus a distinct end-of-stream marker.

/// Number of distinct symbols, including [`Symbol::Sentinel`].
pub const ALPHABET_SIZE: usize = 257;

/// Payload written for the sentinel leaf in a serialized tree. Byte 255
/// shares it; the leading marker of the payload tells them apart.
pub const SENTINEL_PAYLOAD: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Byte(u8),
    /// End-of-stream marker. Never equal to any byte value.
    Sentinel,
}

impl Symbol {
    /// Dense index in `0..ALPHABET_SIZE`. Bytes map to themselves and the
    /// sentinel takes the last slot.
    pub fn index(self) -> usize {
        match self {
            Symbol::Byte(b) => b as usize,
            Symbol::Sentinel => ALPHABET_SIZE - 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=255 => Some(Symbol::Byte(index as u8)),
            256 => Some(Symbol::Sentinel),
            _ => None,
        }
    }

    /// Eight-bit value stored for this symbol's leaf in the tree header.
    pub fn payload(self) -> u8 {
        match self {
            Symbol::Byte(b) => b,
            Symbol::Sentinel => SENTINEL_PAYLOAD,
        }
    }
}
