//! Huffman coding over arbitrary symbol types.
//!
//! Build a tree from the input, then encode symbols to bits and decode them
//! back with the same tree:
//!
//! ```
//! use huffcode::huffman;
//!
//! let s = "Hello my name is Sam!";
//! let tree = huffman(s.chars());
//!
//! let bits = tree.encode(s.chars())?;
//! let decoded: String = tree.decode(&bits)?.into_iter().collect();
//!
//! assert_eq!(decoded, s);
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
//!
//! Ties between equal weights are broken by first appearance in the input,
//! and the first node taken from the heap becomes the left (`0`) child. An
//! input with a single distinct symbol encodes each occurrence as one `0` bit.

pub mod bits;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod node;
pub mod transcript;
pub mod tree;

pub use codec::Codec;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use node::Node;
pub use transcript::Transcript;
pub use tree::{huffman, HuffmanTree};
