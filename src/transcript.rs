//! Plain-text record of an encoding run, suitable for saving next to the input.
//!
//! ```text
//! Input text: aabbbcc
//! Encoded: 10100001111
//! ```

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bits::{parse_bit_string, to_bit_string};
use crate::error::{HuffmanError, Result};

const INPUT_PREFIX: &str = "Input text: ";
const ENCODED_PREFIX: &str = "\nEncoded: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub input: String,
    pub encoded: String,
}

impl Transcript {
    pub fn new(input: impl Into<String>, encoded: &BitSlice) -> Self {
        Self {
            input: input.into(),
            encoded: to_bit_string(encoded),
        }
    }

    pub fn render(&self) -> String {
        format!("{}{}{}{}", INPUT_PREFIX, self.input, ENCODED_PREFIX, self.encoded)
    }

    // the input may span lines; the last `Encoded:` line ends it
    pub fn parse(text: &str) -> Result<Self> {
        let rest = text
            .strip_prefix(INPUT_PREFIX)
            .ok_or_else(|| HuffmanError::invalid_transcript("missing `Input text:` header"))?;
        let split = rest
            .rfind(ENCODED_PREFIX)
            .ok_or_else(|| HuffmanError::invalid_transcript("missing `Encoded:` line"))?;

        let input = &rest[..split];
        let encoded = rest[split + ENCODED_PREFIX.len()..].trim_end();
        // validate, but keep the text as written
        parse_bit_string(encoded)?;

        Ok(Self {
            input: input.to_owned(),
            encoded: encoded.to_owned(),
        })
    }

    pub fn bits(&self) -> Result<BitVec> {
        parse_bit_string(&self.encoded)
    }
}
