use bitvec::prelude::*;
use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::codec::Codec;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::node::Node;

/// Heap entry ordered by `(weight, order)` only.
///
/// Leaves take the first-appearance rank of their symbol as `order`, merged
/// nodes take the next unused number, so ties pop oldest first.
#[derive(Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending<Symbol> {
    weight: usize,
    order: usize,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<Symbol>,
}

/// A Huffman tree together with the table it was built from and the code of
/// every symbol.
///
/// A tree is immutable once built. An empty input produces a tree without a
/// root. A single distinct symbol produces a lone leaf whose code is the one
/// bit `0`, so that every occurrence still costs a bit and decoding can count
/// them.
#[derive(Debug, Clone)]
pub struct HuffmanTree<Symbol> {
    root: Option<Node<Symbol>>,
    frequencies: FrequencyTable<Symbol>,
    codes: HashMap<Symbol, BitBox>,
}

impl<Symbol> HuffmanTree<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    pub fn build(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self::from_frequencies(FrequencyTable::from_symbols(symbols))
    }

    pub fn from_frequencies(frequencies: FrequencyTable<Symbol>) -> Self {
        let mut pq: BinaryHeap<_> = frequencies
            .iter()
            .enumerate()
            .map(|(order, (s, count))| {
                Reverse(Pending {
                    weight: count,
                    order,
                    node: Node::leaf(s.clone(), count),
                })
            })
            .collect();

        let mut next_order = frequencies.len();
        let root = loop {
            let Reverse(left) = match pq.pop() {
                Some(p) => p,
                None => break None,
            };
            let Reverse(right) = match pq.pop() {
                Some(p) => p,
                None => break Some(left.node),
            };

            let node = Node::from_children(left.node, right.node);
            pq.push(Reverse(Pending {
                weight: node.weight(),
                order: next_order,
                node,
            }));
            next_order += 1;
        };

        let codes = match &root {
            Some(Node::Leaf { symbol, .. }) => {
                let mut codes = HashMap::new();
                codes.insert(symbol.clone(), bitbox![0]);
                codes
            }
            Some(node) => node.code_table(),
            None => HashMap::new(),
        };

        log::debug!(
            "built huffman tree: {} symbols, {} distinct, depth {}",
            frequencies.total(),
            frequencies.len(),
            root.as_ref().map_or(0, Node::depth)
        );

        Self {
            root,
            frequencies,
            codes,
        }
    }

    pub fn code(&self, symbol: &Symbol) -> Option<&BitSlice> {
        self.codes.get(symbol).map(|b| b.as_bitslice())
    }

    pub fn codes(&self) -> impl Iterator<Item = (&Symbol, &BitSlice)> {
        self.frequencies
            .iter()
            .filter_map(move |(s, _)| self.code(s).map(|c| (s, c)))
    }

    /// Number of bits needed to encode the input the tree was built from,
    /// saturating at `usize::MAX`.
    pub fn encoded_len(&self) -> usize {
        self.frequencies
            .iter()
            .map(|(s, count)| count.saturating_mul(self.code(s).map_or(0, |c| c.len())))
            .fold(0, usize::saturating_add)
    }

    pub fn codec(&self) -> Codec<'_, Symbol> {
        Codec::new(self)
    }

    pub fn encode(&self, symbols: impl IntoIterator<Item = Symbol>) -> Result<BitVec> {
        self.codec().encode(symbols)
    }

    pub fn decode(&self, bits: &BitSlice) -> Result<Vec<Symbol>> {
        self.codec().decode(bits)
    }
}

impl<Symbol> HuffmanTree<Symbol> {
    pub fn root(&self) -> Option<&Node<Symbol>> {
        self.root.as_ref()
    }

    pub fn frequencies(&self) -> &FrequencyTable<Symbol> {
        &self.frequencies
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn alphabet_len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn leaves(&self) -> Vec<(&Symbol, usize)> {
        self.root
            .as_ref()
            .map(|r| {
                r.leaves()
                    .into_iter()
                    .filter_map(|n| n.symbol().map(|s| (s, n.weight())))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub fn huffman<Symbol: Hash + Eq + Clone>(
    symbols: impl IntoIterator<Item = Symbol>,
) -> HuffmanTree<Symbol> {
    HuffmanTree::build(symbols)
}
