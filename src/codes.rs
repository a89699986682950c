use crate::error::{HuffmanError, Result};
use crate::node::Node;
use bitvec::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

impl<Symbol> Node<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    /// Derives the prefix code of every symbol below this node.
    ///
    /// Taking the left child appends a `0`, the right child a `1`. A tree
    /// made of one leaf gives its symbol the code `0`.
    pub fn code_book(&self) -> (Encoder<Symbol>, Decoder<Symbol>) {
        fn traverse<Symbol: Clone + Hash + Eq>(
            node: &Node<Symbol>,
            v: &mut BitVec,
            dec: &mut HashMap<BitVec, Symbol>,
        ) {
            match node.children() {
                Some((left, right)) => {
                    v.push(false);
                    traverse(left, v, dec);
                    v.pop();

                    v.push(true);
                    traverse(right, v, dec);
                    v.pop();
                }
                None => {
                    for sym in node.symbols() {
                        dec.insert(v.clone(), sym.clone());
                    }
                }
            }
        }

        let mut bv = BitVec::new();
        if self.is_leaf() {
            bv.push(false);
        }

        let mut dec = HashMap::new();
        traverse(self, &mut bv, &mut dec);

        let enc = dec
            .iter()
            .map(|(k, v)| (v.clone(), k.clone().into_boxed_bitslice()))
            .collect();

        (Encoder { encode_table: enc }, Decoder { decode_table: dec })
    }
}

#[derive(Debug, Clone, Derivative)]
#[derivative(
    PartialEq(bound = "Symbol: Eq + Hash"),
    Eq(bound = "Symbol: Eq + Hash")
)]
pub struct Encoder<Symbol> {
    encode_table: HashMap<Symbol, BitBox>,
}

impl<Symbol> Encoder<Symbol>
where
    Symbol: Eq + Hash,
{
    pub fn code(&self, symbol: &Symbol) -> Option<&BitSlice> {
        self.encode_table.get(symbol).map(|b| b.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.encode_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode_table.is_empty()
    }

    pub fn encode(&self, stream: impl IntoIterator<Item = Symbol>) -> Result<BitVec> {
        let mut out = BitVec::new();
        for s in stream {
            let code = self
                .encode_table
                .get(&s)
                .ok_or(HuffmanError::UnknownSymbol)?;
            out.extend_from_bitslice(code);
        }

        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoder<Symbol> {
    decode_table: HashMap<BitVec, Symbol>,
}

impl<Symbol> Decoder<Symbol>
where
    Symbol: Clone,
{
    pub fn decode(&self, input: &BitSlice) -> Result<Vec<Symbol>> {
        let mut out = Vec::new();

        let mut cursor = BitVec::new();
        for b in input.iter().by_vals() {
            cursor.push(b);
            if let Some(sym) = self.decode_table.get(&cursor) {
                cursor.clear();
                out.push(sym.clone());
            }
        }

        if !cursor.is_empty() {
            return Err(HuffmanError::IncompleteCode {
                trailing_bits: cursor.len(),
            });
        }

        Ok(out)
    }
}

/// A code book in a form serde can persist.
///
/// Each code is stored as its bit length plus the backing words, entries
/// ordered by symbol so equal code books serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableCodeBook<Symbol> {
    codes: Vec<(Symbol, usize, Box<[usize]>)>,
}

impl<'a, Symbol> From<&'a Encoder<Symbol>> for SerializableCodeBook<Symbol>
where
    Symbol: Clone + Eq + Hash + Ord,
{
    fn from(other: &'a Encoder<Symbol>) -> Self {
        let mut codes: Vec<_> = other
            .encode_table
            .iter()
            .map(|(k, v)| (k.clone(), v.len(), v.clone().into_boxed_slice()))
            .collect();
        codes.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        Self { codes }
    }
}

impl<Symbol> SerializableCodeBook<Symbol>
where
    Symbol: Clone + Eq + Hash,
{
    pub fn into_parts(self) -> (Encoder<Symbol>, Decoder<Symbol>) {
        let mut encode_table = HashMap::with_capacity(self.codes.len());
        let mut decode_table = HashMap::with_capacity(self.codes.len());

        for (sym, len, words) in self.codes {
            let mut bv = BitBox::from_boxed_slice(words).into_bitvec();
            bv.resize(len, false);

            decode_table.insert(bv.clone(), sym.clone());
            encode_table.insert(sym, bv.into_boxed_bitslice());
        }

        (Encoder { encode_table }, Decoder { decode_table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::huffman;

    fn code_of<Symbol: Eq + Hash>(e: &Encoder<Symbol>, s: Symbol) -> Option<Vec<bool>> {
        e.code(&s).map(|c| c.iter().by_vals().collect())
    }

    #[test]
    fn codes_follow_tree() {
        let tree = huffman("aabbbcc".chars()).unwrap();
        let (e, _) = tree.code_book();

        assert_eq!(e.len(), 3);
        assert_eq!(code_of(&e, 'b'), Some(vec![false]));
        assert_eq!(code_of(&e, 'a'), Some(vec![true, false]));
        assert_eq!(code_of(&e, 'c'), Some(vec![true, true]));
        assert_eq!(code_of(&e, 'z'), None);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let tree = huffman("aaaa".chars()).unwrap();
        let (e, d) = tree.code_book();

        assert_eq!(code_of(&e, 'a'), Some(vec![false]));

        let out = e.encode("aaaa".chars()).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(d.decode(&out).unwrap(), vec!['a'; 4]);
    }

    #[test]
    fn code_lengths_match_depths() {
        let s = "the quick brown fox jumps over the lazy dog";
        let tree = huffman(s.bytes()).unwrap();
        let (e, _) = tree.code_book();

        for (sym, depth) in tree.code_lengths() {
            assert_eq!(e.code(&sym).map(|c| c.len()), Some(depth));
        }
    }

    #[test]
    fn test_encode_decode() {
        let s = String::from(
            "This is a really long message, I sure do hope it encodes and decodes properly.",
        );
        let tree = huffman(s.bytes()).unwrap();
        let (e, d) = tree.code_book();

        let out = e.encode(s.bytes()).unwrap();
        assert_eq!(out.len(), tree.weighted_path_length());

        let dec = String::from_utf8(d.decode(&out).unwrap()).unwrap();
        assert_eq!(dec, s);
    }

    #[test]
    fn encoders_compare_by_their_codes() {
        let (a, _) = huffman("aabbbcc".chars()).unwrap().code_book();
        let (b, _) = huffman("ccbbbaa".chars()).unwrap().code_book();
        let (c, _) = huffman("abbbbcc".chars()).unwrap().code_book();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn encode_unknown_symbol() {
        let (e, _) = huffman("abc".chars()).unwrap().code_book();
        assert_eq!(e.encode("abd".chars()), Err(HuffmanError::UnknownSymbol));
    }

    #[test]
    fn decode_truncated() {
        let (e, d) = huffman("aabbbcc".chars()).unwrap().code_book();
        let mut out = e.encode("ca".chars()).unwrap();
        out.pop();

        assert_eq!(
            d.decode(&out),
            Err(HuffmanError::IncompleteCode { trailing_bits: 1 })
        );
    }

    #[test]
    fn code_book_survives_messagepack() {
        let s = "abracadabra";
        let (e, d) = huffman(s.chars()).unwrap().code_book();

        let data = rmp_serde::to_vec(&SerializableCodeBook::from(&e)).unwrap();
        let packed: SerializableCodeBook<char> = rmp_serde::from_slice(&data).unwrap();
        let (e2, d2) = packed.into_parts();

        assert_eq!(e2, e);
        assert_eq!(d2, d);
    }
}
