use super::storage::{Itemset, PatternSet};
use super::tree::{FPTree, Item};

/// Every non-empty subset of a single-path tree's chain. A subset's support
/// is the frequency of its deepest node, since frequencies never increase
/// towards the leaf.
pub fn single_path_patterns<T: Item>(fp_tree: &FPTree<T>) -> PatternSet<T> {
    let mut emitted: Vec<(Itemset<T>, u64)> = Vec::new();

    for idx in fp_tree.single_path() {
        let node = fp_tree.node(idx);
        let Some(item) = node.item.as_ref() else {
            continue;
        };

        let extended: Vec<(Itemset<T>, u64)> = emitted
            .iter()
            .map(|(items, support)| {
                debug_assert!(node.frequency <= *support);
                let mut items = items.clone();
                items.insert(item.clone());
                (items, node.frequency)
            })
            .collect();

        emitted.push((Itemset::from([item.clone()]), node.frequency));
        emitted.extend(extended);
    }

    let mut result = PatternSet::new();
    for (items, support) in emitted {
        result.insert(items, support);
    }
    result
}
