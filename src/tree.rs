//! Huffman tree stored in a flat arena.
//!
//! Nodes reference their children by [`NodeId`] (an index into the arena), so
//! the whole tree is released at once when the owning operation drops it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::freq::FrequencyTable;
use crate::symbol::Symbol;

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        left: NodeId,
        right: NodeId,
        weight: u64,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the optimal tree for `freq` by greedy forest merging.
    ///
    /// Leaves are created in symbol index order and internal nodes after
    /// them, so an arena index is also the node's creation order. Equal
    /// weights are broken by that order, which makes the tree (and every
    /// archive built from it) reproducible. The node removed first becomes
    /// the left child.
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let mut nodes: Vec<Node> = freq
            .present()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight })
            .collect();

        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Reverse((node.weight(), id)))
            .collect();

        while heap.len() > 1 {
            let (Some(Reverse((lw, left))), Some(Reverse((rw, right)))) = (heap.pop(), heap.pop())
            else {
                break;
            };
            let weight = lw + rw;
            let id = nodes.len();
            nodes.push(Node::Internal {
                left,
                right,
                weight,
            });
            heap.push(Reverse((weight, id)));
        }

        // The sentinel guarantees at least one leaf.
        let root = heap.pop().map(|Reverse((_, id))| id).unwrap_or(0);
        log::debug!(
            "built tree with {} leaves and {} nodes",
            (nodes.len() + 1) / 2,
            nodes.len()
        );
        Self { nodes, root }
    }

    /// Tree consisting of one leaf and no internal node.
    pub fn single_leaf(symbol: Symbol) -> Self {
        Self {
            nodes: vec![Node::Leaf { symbol, weight: 0 }],
            root: 0,
        }
    }

    pub(crate) fn from_arena(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Retag a leaf's symbol. Returns `false` if `id` is not a leaf.
    pub(crate) fn set_symbol(&mut self, id: NodeId, new_symbol: Symbol) -> bool {
        match self.nodes.get_mut(id) {
            Some(Node::Leaf { symbol, .. }) => {
                *symbol = new_symbol;
                true
            }
            _ => false,
        }
    }

    /// Child reached from `id` by one bit: `false` goes left, `true` right.
    /// A leaf has no children; the single-leaf tree maps every bit back onto
    /// its root.
    pub fn step(&self, id: NodeId, bit: bool) -> NodeId {
        match self.nodes[id] {
            Node::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            Node::Leaf { .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(tree: &HuffmanTree) -> Vec<Symbol> {
        let mut out: Vec<_> = (0..tree.len())
            .filter_map(|id| match tree.node(id) {
                Node::Leaf { symbol, .. } => Some(*symbol),
                _ => None,
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn empty_input_gives_single_sentinel_leaf() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&[]));
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(tree.root()),
            &Node::Leaf {
                symbol: Symbol::Sentinel,
                weight: 1
            }
        );
    }

    #[test]
    fn two_symbols_make_two_leaves() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"aaaa"));
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.internal_count(), 1);
        match tree.node(tree.root()) {
            Node::Internal { left, right, weight } => {
                assert_eq!(*weight, 5);
                // lighter sentinel is removed first and goes left
                assert!(matches!(
                    tree.node(*left),
                    Node::Leaf { symbol: Symbol::Sentinel, .. }
                ));
                assert!(matches!(
                    tree.node(*right),
                    Node::Leaf { symbol: Symbol::Byte(b'a'), .. }
                ));
            }
            other => panic!("unexpected root {other:?}"),
        }
    }

    #[test]
    fn full_alphabet_shape() {
        let data: Vec<u8> = (0..=255u8).collect();
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&data));
        assert_eq!(tree.leaf_count(), 257);
        assert_eq!(tree.internal_count(), 256);
        assert_eq!(tree.node(tree.root()).weight(), 257);
        assert_eq!(leaves(&tree).len(), 257);
    }

    #[test]
    fn ties_break_by_creation_order() {
        // every weight equal: the first two leaves merge first
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"ab"));
        let first_internal = tree.node(3);
        assert_eq!(
            first_internal,
            &Node::Internal {
                left: 0,
                right: 1,
                weight: 2
            }
        );
    }

    #[test]
    fn build_is_deterministic() {
        let data = b"abracadabra, said the wizard";
        let a = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        let b = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        assert_eq!(a, b);
    }
}
