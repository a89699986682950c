use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence count for every distinct symbol of an input.
pub type Frequencies<Symbol> = HashMap<Symbol, usize>;

/// Counts how often each symbol occurs in `symbols`.
///
/// Every count is positive and the counts sum to the number of symbols
/// consumed. An empty input yields an empty map.
pub fn count_frequency<Symbol, I>(symbols: I) -> Frequencies<Symbol>
where
    Symbol: Eq + Hash,
    I: IntoIterator<Item = Symbol>,
{
    let mut freq = HashMap::new();
    for s in symbols {
        *freq.entry(s).or_default() += 1;
    }

    freq
}
