use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// A tree needs at least one symbol to be built from.
    #[error("empty alphabet: cannot build a huffman tree without symbols")]
    EmptyAlphabet,

    #[error("symbol is not present in the code book")]
    UnknownSymbol,

    /// The input ended part way through a codeword.
    #[error("bitstream ends with {trailing_bits} bits that do not form a complete code")]
    IncompleteCode { trailing_bits: usize },
}
