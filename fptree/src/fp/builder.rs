use super::tree::{FPTree, Item, TransformedPrefixPath};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Counts, per item, the transactions containing it and drops items below
/// `minimum_support_threshold`. Repeated items inside one transaction are
/// counted once.
pub fn count_frequencies<T, Tx>(transactions: &[Tx], minimum_support_threshold: u64) -> HashMap<T, u64>
where
    T: Item,
    Tx: AsRef<[T]>,
{
    count_weighted(
        transactions.iter().map(|tx| (tx.as_ref(), 1u64)),
        minimum_support_threshold,
    )
}

fn count_weighted<'a, T, I>(rows: I, minimum_support_threshold: u64) -> HashMap<T, u64>
where
    T: Item + 'a,
    I: Iterator<Item = (&'a [T], u64)>,
{
    let mut item_counts: HashMap<T, u64> = HashMap::new();

    for (items, weight) in rows {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if seen.insert(item) {
                *item_counts.entry(item.clone()).or_insert(0) += weight;
            }
        }
    }

    item_counts.retain(|_, &mut count| count >= minimum_support_threshold);
    item_counts
}

/// Surviving items sorted by count descending, ties broken by item
/// ascending. This is the insertion order used for every transaction.
pub fn frequency_order<T: Item>(item_counts: &HashMap<T, u64>) -> Vec<(T, u64)> {
    let mut ordered: Vec<(T, u64)> = item_counts
        .iter()
        .map(|(item, &count)| (item.clone(), count))
        .collect();

    ordered.sort_unstable_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)));
    ordered
}

impl<T: Item> FPTree<T> {
    /// Builds a tree from `transactions` in two scans: one counting item
    /// frequencies, one inserting each transaction's frequent items in
    /// frequency order.
    pub fn new<Tx: AsRef<[T]>>(transactions: &[Tx], minimum_support_threshold: u64) -> Self {
        let rows: Vec<(&[T], u64)> = transactions.iter().map(|tx| (tx.as_ref(), 1)).collect();
        build_weighted(&rows, minimum_support_threshold)
    }

    /// Builds the conditional tree of a pattern base. Equivalent to
    /// [`FPTree::new`] over [`conditional_transactions`](super::tree::conditional_transactions)
    /// of `base`, without materializing the repeats.
    pub fn from_prefix_paths(base: &[TransformedPrefixPath<T>], minimum_support_threshold: u64) -> Self {
        let rows: Vec<(&[T], u64)> = base
            .iter()
            .map(|path| (path.items.as_slice(), path.weight))
            .collect();
        build_weighted(&rows, minimum_support_threshold)
    }
}

fn build_weighted<T: Item>(rows: &[(&[T], u64)], minimum_support_threshold: u64) -> FPTree<T> {
    let item_counts = count_weighted(rows.iter().copied(), minimum_support_threshold);
    let rank: HashMap<T, usize> = frequency_order(&item_counts)
        .into_iter()
        .enumerate()
        .map(|(rank, (item, _))| (item, rank))
        .collect();

    let mut fp_tree = FPTree::empty(minimum_support_threshold);
    let mut ranked: Vec<(usize, &T)> = Vec::new();

    for &(items, weight) in rows {
        ranked.clear();
        ranked.extend(
            items
                .iter()
                .filter_map(|item| rank.get(item).map(|&r| (r, item))),
        );
        if ranked.is_empty() || weight == 0 {
            continue;
        }

        ranked.sort_unstable_by_key(|&(r, _)| r);
        ranked.dedup_by_key(|&mut (r, _)| r);

        let tx_items: Vec<T> = ranked.iter().map(|&(_, item)| item.clone()).collect();
        fp_tree.insert_transaction(&tx_items, weight);
    }

    fp_tree
}
