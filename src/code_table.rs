use crate::symbol::{Symbol, ALPHABET_SIZE};
use crate::tree::{HuffmanTree, Node, NodeId};

/// Prefix code for every leaf of a [`HuffmanTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Vec<bool>>>,
}

impl CodeTable {
    /// Walk `tree` depth-first, recording the root-to-leaf path of each leaf
    /// (`false` for left, `true` for right).
    ///
    /// A tree that is a single leaf has no path at all; that leaf gets the
    /// one-bit code `[false]`.
    pub fn build(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        match tree.node(tree.root()) {
            Node::Leaf { symbol, .. } => codes[symbol.index()] = Some(vec![false]),
            Node::Internal { .. } => {
                let mut path = Vec::new();
                walk(tree, tree.root(), &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&[bool]> {
        self.codes[symbol.index()].as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[bool])> + '_ {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let code = code.as_deref()?;
            Symbol::from_index(i).map(|s| (s, code))
        })
    }

    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn walk(
    tree: &HuffmanTree,
    id: NodeId,
    path: &mut Vec<bool>,
    codes: &mut [Option<Vec<bool>>],
) {
    match tree.node(id) {
        Node::Leaf { symbol, .. } => codes[symbol.index()] = Some(path.clone()),
        Node::Internal { left, right, .. } => {
            path.push(false);
            walk(tree, *left, path, codes);
            path.pop();

            path.push(true);
            walk(tree, *right, path, codes);
            path.pop();
        }
    }
}
