//! Conversions between bit sequences and their `0`/`1` text form.

use bitvec::prelude::*;

use crate::error::{HuffmanError, Result};

pub fn to_bit_string(bits: &BitSlice) -> String {
    bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect()
}

/// ASCII whitespace is skipped; anything else but `0` and `1` is an error.
pub fn parse_bit_string(text: &str) -> Result<BitVec> {
    let mut out = BitVec::with_capacity(text.len());
    for (position, c) in text.chars().enumerate() {
        match c {
            '0' => out.push(false),
            '1' => out.push(true),
            c if c.is_ascii_whitespace() => {}
            found => return Err(HuffmanError::InvalidBitCharacter { found, position }),
        }
    }
    Ok(out)
}
