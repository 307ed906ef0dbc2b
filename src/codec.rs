use bitvec::prelude::*;
use std::hash::Hash;

use crate::error::{HuffmanError, Result};
use crate::node::Node;
use crate::tree::HuffmanTree;

/// Encoder and decoder for one tree.
#[derive(Debug)]
pub struct Codec<'a, Symbol> {
    tree: &'a HuffmanTree<Symbol>,
}

impl<'a, Symbol> Codec<'a, Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    pub fn new(tree: &'a HuffmanTree<Symbol>) -> Self {
        Self { tree }
    }

    pub fn encode(&self, stream: impl IntoIterator<Item = Symbol>) -> Result<BitVec> {
        let mut out = BitVec::new();
        for (position, s) in stream.into_iter().enumerate() {
            let code = self
                .tree
                .code(&s)
                .ok_or(HuffmanError::UnknownSymbol { position })?;
            out.extend_from_bitslice(code);
        }

        log::trace!("encoded into {} bits", out.len());
        Ok(out)
    }

    /// Input that stops partway through a code is an error.
    pub fn decode(&self, input: &BitSlice) -> Result<Vec<Symbol>> {
        let root = match self.tree.root() {
            Some(root) => root,
            None if input.is_empty() => return Ok(Vec::new()),
            None => return Err(HuffmanError::EmptyTreeDecode { len: input.len() }),
        };

        let mut out = Vec::new();
        let mut cursor = root;
        let mut pending = 0;

        for (position, b) in input.iter().by_vals().enumerate() {
            cursor = match cursor {
                // a lone leaf is reached through its one-bit code `0`
                Node::Leaf { .. } if !b => cursor,
                Node::Leaf { .. } => {
                    return Err(HuffmanError::MalformedEncoding { position });
                }
                Node::Internal { .. } => cursor
                    .child(b)
                    .ok_or(HuffmanError::MalformedEncoding { position })?,
            };
            pending += 1;

            if let Some(sym) = cursor.symbol() {
                out.push(sym.clone());
                cursor = root;
                pending = 0;
            }
        }

        if pending != 0 {
            return Err(HuffmanError::TruncatedEncoding { pending });
        }

        log::trace!("decoded {} bits into {} symbols", input.len(), out.len());
        Ok(out)
    }
}
