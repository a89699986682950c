use huffman_tree::{build_tree, count_frequency, create_leaves};
use std::env;

fn main() {
    env_logger::init();

    let s = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("Hello my name is Sam!"));

    let freq = count_frequency(s.chars());
    let leaves = create_leaves(&freq);
    let tree = build_tree(leaves).expect("Input text must not be empty.");

    let mut lengths: Vec<_> = tree.code_lengths().into_iter().collect();
    lengths.sort();
    for (sym, len) in lengths {
        println!("{:?}: {} occurrences, {} bits", sym, freq[&sym], len);
    }

    let (e, d) = tree.code_book();
    let out = e.encode(s.chars()).unwrap();
    let dec: String = d.decode(&out).unwrap().into_iter().collect();

    println!("{} symbols -> {} bits", s.chars().count(), out.len());
    println!("{:?}", dec);
}
