use bitvec::prelude::*;
use huffcode::bits::{parse_bit_string, to_bit_string};
use huffcode::{huffman, HuffmanError, Transcript};

#[test]
fn aabbbcc() {
    let s = "aabbbcc";
    let tree = huffman(s.chars());

    let counts: Vec<_> = tree.frequencies().iter().map(|(c, n)| (*c, n)).collect();
    assert_eq!(counts, vec![('a', 2), ('b', 3), ('c', 2)]);

    let b = tree.code(&'b').unwrap().len();
    assert!(b <= tree.code(&'a').unwrap().len());
    assert!(b <= tree.code(&'c').unwrap().len());

    let bits = tree.encode(s.chars()).unwrap();
    let decoded: String = tree.decode(&bits).unwrap().into_iter().collect();
    assert_eq!(decoded, s);
}

#[test]
fn empty_input() {
    let tree = huffman("".chars());

    assert!(tree.is_empty());
    assert!(tree.encode("".chars()).unwrap().is_empty());
    assert!(tree.decode(BitSlice::empty()).unwrap().is_empty());
    assert_eq!(
        tree.decode(bits![1]).unwrap_err(),
        HuffmanError::EmptyTreeDecode { len: 1 }
    );
}

#[test]
fn single_symbol_alphabet() {
    let tree = huffman("aaaa".chars());

    assert_eq!(tree.alphabet_len(), 1);
    assert!(tree.root().unwrap().is_leaf());

    let bits = tree.encode("aaaa".chars()).unwrap();
    assert_eq!(to_bit_string(&bits), "0000");
    assert_eq!(tree.decode(&bits).unwrap(), vec!['a'; 4]);
}

#[test]
fn encode_subset_of_alphabet() {
    let tree = huffman("abracadabra".chars());
    let bits = tree.encode("cab".chars()).unwrap();

    assert_eq!(tree.decode(&bits).unwrap(), vec!['c', 'a', 'b']);
}

#[test]
fn dangling_partial_code() {
    // `z` occurs once, so its code is one of the longest
    let s = "abracadabraz";
    let tree = huffman(s.chars());
    let last = tree.code(&'z').unwrap().len();
    assert!(last > 1);

    let mut bits = tree.encode(s.chars()).unwrap();
    bits.pop();

    assert_eq!(
        tree.decode(&bits).unwrap_err(),
        HuffmanError::TruncatedEncoding { pending: last - 1 }
    );
}

#[test]
fn codes_shared_across_threads() {
    let s = "concurrent readers share one tree";
    let tree = huffman(s.chars());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| tree.encode(s.chars()).unwrap()))
            .collect();
        let expected = tree.encode(s.chars()).unwrap();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn text_adapters() {
    let input = "Hello my name is Sam!";
    let tree = huffman(input.chars());
    let bits = tree.encode(input.chars()).unwrap();

    let transcript = Transcript::new(input, &bits);
    let rendered = transcript.render();
    assert!(rendered.starts_with("Input text: Hello my name is Sam!\nEncoded: "));

    let back = Transcript::parse(&rendered).unwrap();
    let parsed = parse_bit_string(&back.encoded).unwrap();
    let decoded: String = tree.decode(&parsed).unwrap().into_iter().collect();
    assert_eq!(decoded, back.input);
}
