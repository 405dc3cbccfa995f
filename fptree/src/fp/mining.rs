use super::combinations::single_path_patterns;
use super::storage::PatternSet;
use super::support::{MinimumSupport, SupportError};
use super::tree::{FPTree, Item};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mines every itemset occurring in at least `minimum_support_threshold`
/// transactions.
pub fn fp_growth<T, Tx>(transactions: &[Tx], minimum_support_threshold: u64) -> PatternSet<T>
where
    T: Item,
    Tx: AsRef<[T]>,
{
    let fp_tree = FPTree::new(transactions, minimum_support_threshold);
    log::debug!(
        "built fp-tree: {} transactions, {} frequent items, {} nodes",
        transactions.len(),
        fp_tree.header_table.len(),
        fp_tree.len()
    );

    let patterns = fptree_growth(&fp_tree);
    log::debug!("mined {} frequent patterns", patterns.len());
    patterns
}

/// [`fp_growth`] with an absolute or relative threshold.
pub fn fp_growth_with<T, Tx>(
    transactions: &[Tx],
    min_support: MinimumSupport,
) -> Result<PatternSet<T>, SupportError>
where
    T: Item,
    Tx: AsRef<[T]>,
{
    let min_count = min_support.resolve(transactions.len())?;
    Ok(fp_growth(transactions, min_count))
}

/// Mines all frequent patterns of an already built tree.
///
/// Single-path trees are enumerated directly. Otherwise every header-table
/// item is mined separately through its conditional tree, and the per-item
/// results are joined.
pub fn fptree_growth<T: Item>(fp_tree: &FPTree<T>) -> PatternSet<T> {
    if fp_tree.is_empty() {
        return PatternSet::new();
    }

    if fp_tree.contains_single_path() {
        return single_path_patterns(fp_tree);
    }

    mine_items(fp_tree)
}

#[cfg(not(feature = "parallel"))]
fn mine_items<T: Item>(fp_tree: &FPTree<T>) -> PatternSet<T> {
    let mut patterns = PatternSet::new();
    for item in fp_tree.header_table.keys() {
        patterns.merge(item_patterns(fp_tree, item));
    }
    patterns
}

/// Each item's conditional tree is independent; results are merged once
/// every item is done.
#[cfg(feature = "parallel")]
fn mine_items<T: Item>(fp_tree: &FPTree<T>) -> PatternSet<T> {
    let items: Vec<&T> = fp_tree.header_table.keys().collect();
    items
        .par_iter()
        .map(|&item| item_patterns(fp_tree, item))
        .reduce(PatternSet::new, |mut acc, patterns| {
            acc.merge(patterns);
            acc
        })
}

/// Patterns anchored on `item`: `{item}` itself plus `item` added to every
/// pattern of its conditional tree.
fn item_patterns<T: Item>(fp_tree: &FPTree<T>, item: &T) -> PatternSet<T> {
    let base = fp_tree.conditional_pattern_base(item);
    let conditional_tree = FPTree::from_prefix_paths(&base, fp_tree.minimum_support_threshold);
    log::trace!(
        "conditional tree: {} prefix paths, {} nodes",
        base.len(),
        conditional_tree.len()
    );
    let conditional_patterns = fptree_growth(&conditional_tree);

    let item_support = fp_tree.item_support(item);
    let mut result = PatternSet::new();
    result.insert([item.clone()].into(), item_support);

    for mut pattern in conditional_patterns {
        debug_assert!(pattern.support <= item_support);
        pattern.items.insert(item.clone());
        result.insert_pattern(pattern);
    }
    result
}
