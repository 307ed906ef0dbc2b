use huffcode::{huffman, FrequencyTable, HuffmanTree, Transcript};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// The frequency table is enough to rebuild the exact tree on the other side.
#[derive(Serialize, Deserialize)]
struct Packed {
    frequencies: FrequencyTable<char>,
    bits: String,
}

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    let input = fs::read_to_string(fp).expect("First argument was not a valid UTF-8 file.");

    // encode scope - save to file
    {
        let tree = huffman(input.chars());
        let encoded = tree.encode(input.chars()).unwrap();

        let transcript = Transcript::new(input.clone(), &encoded);
        fs::write("Result.txt", transcript.render()).unwrap();

        let packed = Packed {
            frequencies: tree.frequencies().clone(),
            bits: transcript.encoded,
        };
        fs::write("encoded.mp", rmp_serde::to_vec(&packed).unwrap()).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: Packed = rmp_serde::from_slice(&file_data).unwrap();
        let tree = HuffmanTree::from_frequencies(packed.frequencies);
        let bits = huffcode::bits::parse_bit_string(&packed.bits).unwrap();
        let decoded: String = tree.decode(&bits).unwrap().into_iter().collect();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
