use crate::frequency::Frequencies;
use std::collections::HashMap;
use std::hash::Hash;

/// A node of a huffman tree.
///
/// Either a leaf carrying exactly one symbol and its count, or an internal
/// node owning two children and subsuming all of their symbols. The two
/// cases are only ever produced by [`Node::leaf`] and [`Node::from_children`],
/// so `left` and `right` are always both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<Symbol> {
    symbols: Vec<Symbol>,
    weight: usize,
    left: Option<Box<Node<Symbol>>>,
    right: Option<Box<Node<Symbol>>>,
}

impl<Symbol> Node<Symbol> {
    pub fn leaf(s: Symbol, weight: usize) -> Self {
        Self {
            symbols: vec![s],
            weight,
            left: None,
            right: None,
        }
    }

    /// Joins two subtrees under a new internal node.
    ///
    /// The symbols of `left` come before those of `right`. The two subtrees
    /// must not share a symbol; debug builds panic if they do.
    pub fn from_children(left: Node<Symbol>, right: Node<Symbol>) -> Self
    where
        Symbol: Clone + PartialEq,
    {
        debug_assert!(
            left.symbols.iter().all(|s| !right.symbols.contains(s)),
            "subtrees of an internal node must not share symbols"
        );

        let mut symbols = Vec::with_capacity(left.symbols.len() + right.symbols.len());
        symbols.extend_from_slice(&left.symbols);
        symbols.extend_from_slice(&right.symbols);

        Self {
            weight: left.weight + right.weight,
            symbols,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn left(&self) -> Option<&Node<Symbol>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<Symbol>> {
        self.right.as_deref()
    }

    pub fn children(&self) -> Option<(&Node<Symbol>, &Node<Symbol>)> {
        match (self.left.as_deref(), self.right.as_deref()) {
            (Some(l), Some(r)) => Some((l, r)),
            _ => None,
        }
    }

    /// Returns true iff the node represents exactly one symbol.
    pub fn is_leaf(&self) -> bool {
        self.symbols.len() == 1
    }

    /// All leaves below this node, left to right.
    pub fn leaves(&self) -> Vec<&Node<Symbol>> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => out.push(node),
            }
        }

        out
    }

    /// Depth of every leaf, i.e. the length of the code its symbol gets.
    ///
    /// A tree made of a single leaf reports a depth of zero.
    pub fn code_lengths(&self) -> HashMap<Symbol, usize>
    where
        Symbol: Eq + Hash + Clone,
    {
        let mut lengths = HashMap::new();
        let mut stack = vec![(self, 0)];

        while let Some((node, depth)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
                None => {
                    for s in &node.symbols {
                        lengths.insert(s.clone(), depth);
                    }
                }
            }
        }

        lengths
    }

    /// Sum of weight times depth over all leaves.
    pub fn weighted_path_length(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![(self, 0)];

        while let Some((node, depth)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                None => total += node.weight * depth,
            }
        }

        total
    }
}

/// Turns a frequency table into one leaf per symbol, sorted by ascending
/// weight.
///
/// Leaves of equal weight are ordered by their symbol, so the result does not
/// depend on the iteration order of the map.
pub fn create_leaves<Symbol>(frequencies: &Frequencies<Symbol>) -> Vec<Node<Symbol>>
where
    Symbol: Ord + Clone,
{
    let mut entries: Vec<(&Symbol, usize)> =
        frequencies.iter().map(|(s, &c)| (s, c)).collect();
    entries.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    entries
        .into_iter()
        .map(|(s, count)| Node::leaf(s.clone(), count))
        .collect()
}
