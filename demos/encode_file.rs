use bitvec::prelude::*;
use huffman_tree::{huffman, SerializableCodeBook};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

#[derive(Serialize, Deserialize)]
struct HuffmanSerialized {
    data: Box<[usize]>,
    bit_len: usize,
    codes: SerializableCodeBook<u8>,
}

impl HuffmanSerialized {
    fn new(bv: BitVec, codes: SerializableCodeBook<u8>) -> Self {
        let bl = bv.len();

        Self {
            data: bv.into_boxed_bitslice().into_boxed_slice(),
            bit_len: bl,
            codes,
        }
    }

    fn into_parts(self) -> (BitVec, SerializableCodeBook<u8>) {
        let Self {
            data,
            bit_len,
            codes,
        } = self;

        let mut bv = BitBox::from_boxed_slice(data).into_bitvec();
        bv.resize(bit_len, false);

        (bv, codes)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let fp = env::args()
        .nth(1)
        .expect("Please provide path to input file as first argument.");

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let tree = huffman(input_bytes.iter().copied())
            .expect("Input file must not be empty.");
        let (e, _) = tree.code_book();

        let encoded = e.encode(input_bytes.iter().copied()).unwrap();
        let packed = HuffmanSerialized::new(encoded, SerializableCodeBook::from(&e));
        let data = rmp_serde::to_vec(&packed).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: HuffmanSerialized = rmp_serde::from_slice(&file_data).unwrap();
        let (enc, codes) = packed.into_parts();
        let (_, d) = codes.into_parts();
        let decoded = d.decode(&enc).unwrap();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
