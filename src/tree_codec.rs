//! Level-order bit encoding of a [`HuffmanTree`] for the archive header.
//!
//! Nodes are visited breadth first. An internal node is written as a single
//! `0` bit; a leaf as a `1` bit followed by its 8-bit payload, most
//! significant bit first. The sentinel and byte 255 share the payload
//! [`SENTINEL_PAYLOAD`]; the decoder learns which of the (at most two) `0xFF`
//! leaves is the sentinel from the leading marker of the payload.
//!
//! A tree can only have a 257th leaf when every symbol is present, so once 256
//! leaves have been written the one node still pending is a leaf whose payload
//! is already known: the value not yet used, or `0xFF` if all 256 were. That
//! leaf is implied and takes no bits, which keeps the largest tree (257
//! leaves, 256 internal nodes) at exactly [`MAX_TREE_SIZE`] bytes.

use std::collections::VecDeque;
use std::mem;

use crate::bits::{BitReader, BitWriter};
use crate::error::{HuffError, Result};
use crate::symbol::{Symbol, ALPHABET_SIZE, SENTINEL_PAYLOAD};
use crate::tree::{HuffmanTree, Node, NodeId};

/// Largest serialized tree accepted, in bytes.
pub const MAX_TREE_SIZE: usize = 320;

const MAX_NODES: usize = 2 * ALPHABET_SIZE - 1;

/// Leaves written before the last one becomes implied.
const EXPLICIT_LEAVES: usize = ALPHABET_SIZE - 1;

/// Tracks which leaf payloads a tree has used so far.
struct PayloadSet {
    seen: [bool; 256],
    leaves: usize,
    shared: usize,
}

impl PayloadSet {
    fn new() -> Self {
        Self {
            seen: [false; 256],
            leaves: 0,
            shared: 0,
        }
    }

    /// Record `payload`. Only [`SENTINEL_PAYLOAD`] may occur twice.
    fn insert(&mut self, payload: u8) -> Result<()> {
        if payload == SENTINEL_PAYLOAD {
            self.shared += 1;
            if self.shared > 2 {
                return Err(HuffError::invalid_archive(
                    "more than two leaves carry payload 0xff",
                ));
            }
        } else if self.seen[payload as usize] {
            return Err(HuffError::invalid_archive(format!(
                "duplicate leaf payload {payload:#04x}"
            )));
        }
        self.seen[payload as usize] = true;
        self.leaves += 1;
        Ok(())
    }

    /// True once the next leaf is implied.
    fn last_is_implied(&self) -> bool {
        self.leaves == EXPLICIT_LEAVES
    }

    /// Payload of the implied 257th leaf.
    fn implied_payload(&self) -> u8 {
        self.seen
            .iter()
            .position(|&s| !s)
            .map_or(SENTINEL_PAYLOAD, |p| p as u8)
    }
}

/// Serialize `tree` to its level-order form. Unused bits of the final byte
/// are zero.
pub fn serialize(tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut writer = BitWriter::new(Vec::new());
    let mut payloads = PayloadSet::new();
    let mut queue = VecDeque::from([tree.root()]);

    while let Some(id) = queue.pop_front() {
        if payloads.last_is_implied() {
            match tree.node(id) {
                Node::Leaf { symbol, .. }
                    if symbol.payload() == payloads.implied_payload() && queue.is_empty() =>
                {
                    break
                }
                _ => {
                    return Err(HuffError::InvalidInput(
                        "tree has more leaves than the alphabet".into(),
                    ))
                }
            }
        }
        match tree.node(id) {
            Node::Internal { left, right, .. } => {
                writer.write_bit(false)?;
                queue.push_back(*left);
                queue.push_back(*right);
            }
            Node::Leaf { symbol, .. } => {
                let payload = symbol.payload();
                payloads
                    .insert(payload)
                    .map_err(|e| HuffError::InvalidInput(e.to_string()))?;
                writer.write_bit(true)?;
                writer.write_u8(payload)?;
            }
        }
    }

    let bits = writer.bits_written();
    let bytes = writer.finish(false)?;
    if bytes.len() > MAX_TREE_SIZE {
        return Err(HuffError::invalid_archive(format!(
            "serialized tree is {} bytes, limit is {MAX_TREE_SIZE}",
            bytes.len()
        )));
    }
    log::trace!("serialized tree: {bits} bits in {} bytes", bytes.len());
    Ok(bytes)
}

/// Rebuild a tree from its level-order form.
///
/// Every leaf comes back as [`Symbol::Byte`] holding its raw payload; the
/// caller decides which `0xFF` leaf is the sentinel. Node weights are not
/// stored and read back as zero.
pub fn deserialize(data: &[u8]) -> Result<HuffmanTree> {
    let mut reader = BitReader::from_slice(data);
    let mut payloads = PayloadSet::new();
    let truncated = || HuffError::invalid_archive("tree is truncated");

    match reader.read_bit()? {
        None => return Err(HuffError::invalid_archive("tree is empty")),
        Some(true) => {
            let payload = reader.read_u8()?.ok_or_else(truncated)?;
            return Ok(HuffmanTree::single_leaf(Symbol::Byte(payload)));
        }
        Some(false) => {}
    }

    let placeholder = Node::Leaf {
        symbol: Symbol::Byte(0),
        weight: 0,
    };
    let mut nodes = vec![
        Node::Internal {
            left: 1,
            right: 2,
            weight: 0,
        },
        placeholder.clone(),
        placeholder.clone(),
    ];
    let mut current: VecDeque<NodeId> = VecDeque::from([1, 2]);
    let mut next: VecDeque<NodeId> = VecDeque::new();

    loop {
        while let Some(id) = current.pop_front() {
            if payloads.last_is_implied() {
                if !current.is_empty() || !next.is_empty() {
                    return Err(HuffError::invalid_archive(
                        "tree has more leaves than the alphabet",
                    ));
                }
                let payload = payloads.implied_payload();
                payloads.insert(payload)?;
                nodes[id] = Node::Leaf {
                    symbol: Symbol::Byte(payload),
                    weight: 0,
                };
                continue;
            }
            match reader.read_bit()?.ok_or_else(truncated)? {
                false => {
                    if nodes.len() + 2 > MAX_NODES {
                        return Err(HuffError::invalid_archive("tree has too many nodes"));
                    }
                    let left = nodes.len();
                    let right = left + 1;
                    nodes.push(placeholder.clone());
                    nodes.push(placeholder.clone());
                    nodes[id] = Node::Internal {
                        left,
                        right,
                        weight: 0,
                    };
                    next.push_back(left);
                    next.push_back(right);
                }
                true => {
                    let payload = reader.read_u8()?.ok_or_else(truncated)?;
                    payloads.insert(payload)?;
                    nodes[id] = Node::Leaf {
                        symbol: Symbol::Byte(payload),
                        weight: 0,
                    };
                }
            }
        }
        if next.is_empty() {
            break;
        }
        mem::swap(&mut current, &mut next);
    }

    log::trace!(
        "deserialized tree: {} nodes from {} bits",
        nodes.len(),
        reader.bits_read()
    );
    Ok(HuffmanTree::from_arena(nodes, 0))
}
