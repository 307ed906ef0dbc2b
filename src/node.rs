use bitvec::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// A node of a Huffman tree. Internal nodes weigh the sum of their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node<Symbol>>,
        right: Box<Node<Symbol>>,
    },
}

impl<Symbol> Node<Symbol> {
    pub(crate) fn leaf(symbol: Symbol, weight: usize) -> Self {
        Node::Leaf { symbol, weight }
    }

    pub(crate) fn from_children(left: Node<Symbol>, right: Node<Symbol>) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&Node<Symbol>> {
        match self {
            Node::Internal { left, .. } => Some(left.as_ref()),
            Node::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&Node<Symbol>> {
        match self {
            Node::Internal { right, .. } => Some(right.as_ref()),
            Node::Leaf { .. } => None,
        }
    }

    /// `false` is left, `true` is right.
    pub fn child(&self, bit: bool) -> Option<&Node<Symbol>> {
        if bit {
            self.right()
        } else {
            self.left()
        }
    }

    pub fn leaves(&self) -> Vec<&Node<Symbol>> {
        fn walk<'a, Symbol>(node: &'a Node<Symbol>, out: &mut Vec<&'a Node<Symbol>>) {
            match node {
                Node::Leaf { .. } => out.push(node),
                Node::Internal { left, right, .. } => {
                    walk(left, out);
                    walk(right, out);
                }
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl<Symbol> Node<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    // a lone leaf root maps to the empty path
    pub(crate) fn code_table(&self) -> HashMap<Symbol, BitBox> {
        fn traverse<Symbol: Hash + Eq + Clone>(
            node: &Node<Symbol>,
            v: &mut BitVec,
            codes: &mut HashMap<Symbol, BitBox>,
        ) {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), v.clone().into_boxed_bitslice());
                }
                Node::Internal { left, right, .. } => {
                    v.push(false);
                    traverse(left, v, codes);
                    v.pop();

                    v.push(true);
                    traverse(right, v, codes);
                    v.pop();
                }
            }
        }

        let mut bv = BitVec::new();
        let mut codes = HashMap::new();
        traverse(self, &mut bv, &mut codes);
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_leaf() {
        let n = Node::leaf('x', 4);
        assert_eq!(n.weight(), 4);
        assert_eq!(n.symbol(), Some(&'x'));
        assert!(n.is_leaf());
        assert_eq!(n.left(), None);
        assert_eq!(n.right(), None);
    }

    #[test]
    fn node_from_children() {
        let left = Node::leaf(true, 5);
        let right = Node::leaf(false, 2);

        let n = Node::from_children(left.clone(), right.clone());

        assert_eq!(n.weight(), 7);
        assert_eq!(n.symbol(), None);
        assert_eq!(n.left(), Some(&left));
        assert_eq!(n.right(), Some(&right));
        assert_eq!(n.child(false), Some(&left));
        assert_eq!(n.child(true), Some(&right));
    }

    #[test]
    fn code_table_follows_branches() {
        let n = Node::from_children(
            Node::leaf('a', 1),
            Node::from_children(Node::leaf('b', 1), Node::leaf('c', 1)),
        );
        let codes = n.code_table();

        assert_eq!(&*codes[&'a'], bits![0]);
        assert_eq!(&*codes[&'b'], bits![1, 0]);
        assert_eq!(&*codes[&'c'], bits![1, 1]);
        assert_eq!(n.depth(), 2);
        assert_eq!(n.leaves().len(), 3);
    }
}
