//! Construction of huffman trees from symbol frequencies.
//!
//! The pipeline runs strictly forward: [`count_frequency`] turns a symbol
//! sequence into a frequency table, [`create_leaves`] turns that table into
//! leaves sorted by ascending weight, and [`build_tree`] merges the two
//! lightest nodes until a single root remains. [`huffman`] does all three.
//!
//! ```
//! let tree = huffman_tree::huffman("aabbbcc".chars()).unwrap();
//! assert_eq!(tree.weight(), 7);
//!
//! let lengths = tree.code_lengths();
//! assert_eq!(lengths[&'b'], 1);
//! assert_eq!(lengths[&'a'], 2);
//! ```

mod codes;
mod error;
mod frequency;
mod node;
mod tree;

pub use codes::{Decoder, Encoder, SerializableCodeBook};
pub use error::{HuffmanError, Result};
pub use frequency::{count_frequency, Frequencies};
pub use node::{create_leaves, Node};
pub use tree::{build_tree, huffman};
