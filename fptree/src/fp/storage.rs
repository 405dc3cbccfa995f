use super::tree::Item;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

/// Canonical itemset: equality and hashing do not depend on insertion order.
pub type Itemset<T> = BTreeSet<T>;

/// A frequent itemset with its support count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern<T> {
    pub items: Itemset<T>,
    pub support: u64,
}

impl<T: Item> Pattern<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I, support: u64) -> Self {
        Self {
            items: items.into_iter().collect(),
            support,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Mined patterns keyed by itemset. Each itemset is stored once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet<T> {
    patterns: BTreeMap<Itemset<T>, u64>,
}

impl<T: Item> Default for PatternSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> PatternSet<T> {
    pub fn new() -> Self {
        Self {
            patterns: BTreeMap::new(),
        }
    }

    /// Adds `items` with `support`. Producing the same itemset twice with
    /// different supports means the tree was mined incorrectly; debug builds
    /// panic, release builds keep the first support.
    pub fn insert(&mut self, items: Itemset<T>, support: u64) {
        debug_assert!(!items.is_empty());
        match self.patterns.entry(items) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(support);
            }
            btree_map::Entry::Occupied(entry) => {
                debug_assert_eq!(
                    *entry.get(),
                    support,
                    "itemset produced twice with conflicting support"
                );
            }
        }
    }

    pub fn insert_pattern(&mut self, pattern: Pattern<T>) {
        self.insert(pattern.items, pattern.support);
    }

    /// Moves every pattern of `other` into `self`.
    pub fn merge(&mut self, other: PatternSet<T>) {
        for (items, support) in other.patterns {
            self.insert(items, support);
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn support(&self, items: &Itemset<T>) -> Option<u64> {
        self.patterns.get(items).copied()
    }

    pub fn contains(&self, pattern: &Pattern<T>) -> bool {
        self.support(&pattern.items) == Some(pattern.support)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<T>, u64)> + '_ {
        self.patterns.iter().map(|(items, &support)| (items, support))
    }

    /// Patterns ordered by cardinality, then lexicographically by item.
    pub fn into_sorted_vec(self) -> Vec<Pattern<T>> {
        let mut patterns: Vec<Pattern<T>> = self.into_iter().collect();
        patterns.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.items.cmp(&b.items)));
        patterns
    }

    /// One level per itemset size; `levels()[k - 1]` holds the `k`-itemsets.
    pub fn levels(&self) -> Vec<FrequentLevel<T>> {
        let mut result: Vec<FrequentLevel<T>> = Vec::new();

        for (items, support) in self.iter() {
            let size = items.len();
            while result.len() < size {
                result.push(FrequentLevel::new(result.len() + 1));
            }
            result[size - 1].add_itemset(items.iter().cloned(), support);
        }
        result
    }
}

impl<T: Item> IntoIterator for PatternSet<T> {
    type Item = Pattern<T>;
    type IntoIter = std::iter::Map<btree_map::IntoIter<Itemset<T>, u64>, fn((Itemset<T>, u64)) -> Pattern<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns
            .into_iter()
            .map(into_pattern as fn((Itemset<T>, u64)) -> Pattern<T>)
    }
}

fn into_pattern<T>((items, support): (Itemset<T>, u64)) -> Pattern<T> {
    Pattern { items, support }
}

impl<T: Item> FromIterator<Pattern<T>> for PatternSet<T> {
    fn from_iter<I: IntoIterator<Item = Pattern<T>>>(iter: I) -> Self {
        let mut set = PatternSet::new();
        for pattern in iter {
            set.insert_pattern(pattern);
        }
        set
    }
}

/// Flat storage for the itemsets of one size, with their supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel<T> {
    items: Vec<T>,
    supports: Vec<u64>,
    pub itemset_size: usize,
}

impl<T: Item> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            items: Vec::new(),
            supports: Vec::new(),
            itemset_size,
        }
    }

    /// Appends one itemset. The items are expected sorted and distinct.
    pub fn add_itemset<I: IntoIterator<Item = T>>(&mut self, items: I, support: u64) -> usize {
        let start = self.items.len();
        self.items.extend(items);
        debug_assert_eq!(self.items.len() - start, self.itemset_size);
        self.supports.push(support);
        self.supports.len() - 1
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        let start = idx * self.itemset_size;
        &self.items[start..start + self.itemset_size]
    }

    pub fn support(&self, idx: usize) -> u64 {
        self.supports[idx]
    }

    pub fn supports(&self) -> &[u64] {
        &self.supports
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.len()).map(move |idx| self.get_itemset(idx))
    }
}
