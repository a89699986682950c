use crate::error::{HuffmanError, Result};
use crate::frequency::count_frequency;
use crate::node::{create_leaves, Node};
use derivative::Derivative;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// A node waiting in the forest.
///
/// Ordered by weight, then by the order in which it entered the forest, so
/// that ties resolve first-in first-out.
#[derive(Derivative)]
#[derivative(
    PartialEq(bound = ""),
    Eq(bound = ""),
    PartialOrd(bound = ""),
    Ord(bound = "")
)]
struct Pending<Symbol> {
    weight: usize,
    seq: usize,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<Symbol>,
}

/// Merges `nodes` into a single huffman tree and returns its root.
///
/// The two lightest nodes of the forest are joined until one remains. The
/// first one taken becomes the left child. Among equal weights the node that
/// entered the forest earlier is taken first; input nodes enter in the order
/// given, merged nodes after all of them.
///
/// A single node is returned as is. An empty input is an error.
pub fn build_tree<Symbol, I>(nodes: I) -> Result<Node<Symbol>>
where
    Symbol: Clone + PartialEq,
    I: IntoIterator<Item = Node<Symbol>>,
{
    let mut pq: BinaryHeap<Reverse<Pending<Symbol>>> = nodes
        .into_iter()
        .enumerate()
        .map(|(seq, node)| {
            Reverse(Pending {
                weight: node.weight(),
                seq,
                node,
            })
        })
        .collect();

    if pq.is_empty() {
        debug!("refusing to build a tree from an empty forest");
        return Err(HuffmanError::EmptyAlphabet);
    }

    let forest_size = pq.len();
    let mut next_seq = forest_size;

    while pq.len() > 1 {
        let (Some(Reverse(left)), Some(Reverse(right))) = (pq.pop(), pq.pop()) else {
            break;
        };

        trace!(
            "merging weight {} (#{}) with weight {} (#{}) into #{}",
            left.weight,
            left.seq,
            right.weight,
            right.seq,
            next_seq
        );

        let node = Node::from_children(left.node, right.node);
        pq.push(Reverse(Pending {
            weight: node.weight(),
            seq: next_seq,
            node,
        }));
        next_seq += 1;
    }

    let root = pq
        .pop()
        .map(|r| r.0.node)
        .ok_or(HuffmanError::EmptyAlphabet)?;

    debug!(
        "built huffman tree from {} nodes, root weight {}",
        forest_size,
        root.weight()
    );

    Ok(root)
}

/// Builds the huffman tree for a sequence of symbols.
pub fn huffman<Symbol, I>(symbols: I) -> Result<Node<Symbol>>
where
    Symbol: Eq + Hash + Ord + Clone,
    I: IntoIterator<Item = Symbol>,
{
    let freq = count_frequency(symbols);
    build_tree(create_leaves(&freq))
}
