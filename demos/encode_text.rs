use huffcode::bits::to_bit_string;
use huffcode::huffman;

fn main() {
    let s = String::from("Hello my name is Sam!");
    let tree = huffman(s.chars());

    for (sym, code) in tree.codes() {
        println!("{:?} -> {}", sym, to_bit_string(code));
    }

    let out = tree.encode(s.chars()).expect("every symbol is in the tree");
    println!("{}", to_bit_string(&out));

    let dec: Result<String, _> = tree.decode(&out).map(|v| v.into_iter().collect());
    println!("{:?}", dec);
}
