use super::*;
use std::collections::HashMap;

fn child_with_item(tree: &FPTree<u32>, parent: NodeId, item: u32) -> Option<NodeId> {
    tree.node(parent)
        .children
        .iter()
        .copied()
        .find(|&c| tree.node(c).item == Some(item))
}

#[test]
fn test_count_frequencies_filters_and_dedups() {
    let transactions = vec![vec![1, 2, 2, 3], vec![1, 3], vec![1, 4]];

    let counts = count_frequencies(&transactions, 2);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&1], 3);
    assert_eq!(counts[&3], 2);
    assert!(!counts.contains_key(&2)); // repeated within one transaction only
    assert!(!counts.contains_key(&4));
}

#[test]
fn test_frequency_order_breaks_ties_by_item() {
    let counts: HashMap<char, u64> = [('c', 2), ('a', 2), ('b', 5), ('d', 1)].into_iter().collect();

    let ordered = frequency_order(&counts);

    assert_eq!(ordered, vec![('b', 5), ('a', 2), ('c', 2), ('d', 1)]);
}

#[test]
fn test_fp_tree_insert() {
    let mut tree = FPTree::empty(1);

    // Insert first transaction: [1, 2, 3]
    tree.insert_transaction(&[1, 2, 3], 1);

    assert!(child_with_item(&tree, FPTree::<u32>::ROOT, 1).is_some());
    assert_eq!(tree.header_table[&1].len(), 1);
    assert_eq!(tree.header_table[&2].len(), 1);
    assert_eq!(tree.header_table[&3].len(), 1);

    // Insert second transaction: [1, 2, 4] (shares prefix with first)
    tree.insert_transaction(&[1, 2, 4], 1);

    let node1 = child_with_item(&tree, FPTree::<u32>::ROOT, 1).unwrap();
    assert_eq!(tree.node(node1).frequency, 2);
    assert_eq!(tree.header_table[&4].len(), 1);
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_fp_tree_new_orders_by_frequency() {
    // 2 appears in every transaction, so it sits directly below the root.
    let transactions = vec![vec![1, 2], vec![2, 3], vec![3, 2, 1], vec![2]];

    let tree = FPTree::new(&transactions, 1);

    assert_eq!(tree.root().children.len(), 1);
    let top = tree.root().children[0];
    assert_eq!(tree.node(top).item, Some(2));
    assert_eq!(tree.node(top).frequency, 4);
    assert_eq!(tree.item_support(&1), 2);
    assert_eq!(tree.item_support(&3), 2);
    assert_eq!(tree.item_support(&9), 0);
}

#[test]
fn test_fp_tree_drops_infrequent_items() {
    let transactions = vec![vec!['a', 'b'], vec!['a', 'c'], vec!['a']];

    let tree = FPTree::new(&transactions, 2);

    assert_eq!(tree.header_table.keys().copied().collect::<Vec<_>>(), vec!['a']);
    assert!(tree.contains_single_path());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_fp_tree_parent_links() {
    let transactions = vec![vec![1, 2, 3], vec![1, 2], vec![1]];
    let tree = FPTree::new(&transactions, 1);

    assert!(tree.root().is_root());
    assert_eq!(tree.root().item, None);
    for (id, node) in tree.nodes.iter().enumerate().skip(1) {
        let parent = node.parent.unwrap();
        assert!(tree.node(parent).children.contains(&id));
        if parent != FPTree::<u32>::ROOT {
            assert!(node.frequency <= tree.node(parent).frequency);
        }
    }
}

#[test]
fn test_empty_tree() {
    let transactions: Vec<Vec<u32>> = vec![vec![1], vec![2]];
    let tree = FPTree::new(&transactions, 3);

    assert!(tree.is_empty());
    assert!(tree.contains_single_path());
    assert!(tree.single_path().is_empty());
    assert!(fptree_growth(&tree).is_empty());
}

#[test]
fn test_fp_tree_prefix_paths() {
    let mut tree = FPTree::empty(1);

    // root → 1 → 2 → 3
    //           └→ 4
    tree.insert_transaction(&[1, 2, 3], 1);
    tree.insert_transaction(&[1, 2, 4], 2);

    let paths = tree.conditional_pattern_base(&3);
    assert_eq!(paths, vec![TransformedPrefixPath::new(vec![2, 1], 1)]);

    let paths = tree.conditional_pattern_base(&4);
    assert_eq!(paths, vec![TransformedPrefixPath::new(vec![2, 1], 2)]);

    // Occurrences right below the root have no prefix.
    assert!(tree.conditional_pattern_base(&1).is_empty());
    assert!(tree.conditional_pattern_base(&7).is_empty());
}

#[test]
fn test_conditional_transactions_repeat_by_weight() {
    let base = vec![
        TransformedPrefixPath::new(vec!['b', 'a'], 2),
        TransformedPrefixPath::new(vec!['c'], 1),
    ];

    let transactions = conditional_transactions(&base);

    assert_eq!(
        transactions,
        vec![vec!['b', 'a'], vec!['b', 'a'], vec!['c']]
    );
}

#[test]
fn test_weighted_build_matches_materialized() {
    let base = vec![
        TransformedPrefixPath::new(vec![3, 1], 2),
        TransformedPrefixPath::new(vec![2, 1], 1),
        TransformedPrefixPath::new(vec![2], 3),
        TransformedPrefixPath::new(vec![4], 1),
    ];

    let weighted = FPTree::from_prefix_paths(&base, 2);
    let materialized = FPTree::new(&conditional_transactions(&base), 2);

    assert_eq!(weighted, materialized);
    assert!(!weighted.header_table.contains_key(&4));
}

#[test]
fn test_fp_tree_single_path() {
    let mut tree1 = FPTree::empty(1);
    tree1.insert_transaction(&[1, 2, 3], 1);
    assert!(tree1.contains_single_path());

    let path: Vec<u32> = tree1
        .single_path()
        .into_iter()
        .filter_map(|id| tree1.node(id).item)
        .collect();
    assert_eq!(path, vec![1, 2, 3]);

    // Branching below the first node breaks the single path.
    let mut tree2 = FPTree::empty(1);
    tree2.insert_transaction(&[1, 2], 1);
    tree2.insert_transaction(&[1, 3], 1);
    assert!(!tree2.contains_single_path());
}

#[test]
fn test_single_path_patterns() {
    let mut tree = FPTree::empty(1);
    tree.insert_transaction(&[5, 7, 9], 5);
    tree.insert_transaction(&[5, 7], 3);
    tree.insert_transaction(&[5], 2);

    let patterns = combinations::single_path_patterns(&tree);

    assert_eq!(patterns.len(), 7);
    assert_eq!(patterns.support(&[5].into()), Some(10));
    assert_eq!(patterns.support(&[7].into()), Some(8));
    assert_eq!(patterns.support(&[5, 7].into()), Some(8));
    assert_eq!(patterns.support(&[9].into()), Some(5));
    assert_eq!(patterns.support(&[5, 9].into()), Some(5));
    assert_eq!(patterns.support(&[7, 9].into()), Some(5));
    assert_eq!(patterns.support(&[5, 7, 9].into()), Some(5));
}

#[test]
fn test_fp_growth_simple() {
    // Transactions: [[0,1], [0,1,2], [0,2], [1,2]]
    // Every item and every pair appears twice or more; the triple only once.
    let transactions = vec![vec![0, 1], vec![0, 1, 2], vec![0, 2], vec![1, 2]];

    let patterns = fp_growth(&transactions, 2);

    assert_eq!(patterns.len(), 6);
    for item in 0..3 {
        assert_eq!(patterns.support(&[item].into()), Some(3));
    }
    assert_eq!(patterns.support(&[0, 1].into()), Some(2));
    assert_eq!(patterns.support(&[0, 2].into()), Some(2));
    assert_eq!(patterns.support(&[1, 2].into()), Some(2));
    assert_eq!(patterns.support(&[0, 1, 2].into()), None);
}

#[test]
fn test_fp_growth_threshold_edges() {
    let transactions = vec![vec!['x', 'y'], vec!['y']];

    let everything = fp_growth(&transactions, 0);
    assert_eq!(everything, fp_growth(&transactions, 1));
    assert_eq!(everything.len(), 3);

    assert!(fp_growth(&transactions, 3).is_empty());

    let none: Vec<Vec<char>> = Vec::new();
    assert!(fp_growth(&none, 1).is_empty());
}

#[test]
fn test_minimum_support_resolve() {
    assert_eq!(MinimumSupport::Count(3).resolve(10), Ok(3));
    assert_eq!(MinimumSupport::Count(0).resolve(10), Ok(1));
    assert_eq!(MinimumSupport::Fraction(0.5).resolve(5), Ok(3));
    assert_eq!(MinimumSupport::Fraction(0.25).resolve(8), Ok(2));
    assert_eq!(MinimumSupport::Fraction(1.0).resolve(4), Ok(4));
    assert_eq!(MinimumSupport::from(7), MinimumSupport::Count(7));

    assert_eq!(
        MinimumSupport::Fraction(0.0).resolve(10),
        Err(SupportError::InvalidFraction(0.0))
    );
    assert!(MinimumSupport::Fraction(1.5).resolve(10).is_err());
    assert!(MinimumSupport::Fraction(f64::NAN).resolve(10).is_err());
    assert_eq!(
        MinimumSupport::Fraction(0.5).resolve(0),
        Err(SupportError::NoTransactions)
    );
}

#[test]
fn test_fp_growth_with_fraction() {
    let transactions = vec![vec![0, 1], vec![0, 1, 2], vec![0, 2], vec![1, 2]];

    let patterns = fp_growth_with(&transactions, MinimumSupport::Fraction(0.5)).unwrap();
    assert_eq!(patterns, fp_growth(&transactions, 2));

    let err = fp_growth_with(&transactions, MinimumSupport::Fraction(-1.0)).unwrap_err();
    assert_eq!(err.to_string(), "Minimum support fraction must be in (0, 1], got -1");
}

#[test]
fn test_pattern_set_dedups() {
    let mut set = PatternSet::new();
    set.insert_pattern(Pattern::new([2, 1], 4));
    set.insert_pattern(Pattern::new([1, 2], 4));
    set.insert_pattern(Pattern::new([3], 6));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&Pattern::new([1, 2], 4)));
    assert!(!set.contains(&Pattern::new([1, 2], 3)));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "conflicting support")]
fn test_pattern_set_conflicting_support_panics() {
    let mut set = PatternSet::new();
    set.insert_pattern(Pattern::new([1, 2], 4));
    set.insert_pattern(Pattern::new([2, 1], 5));
}

#[test]
fn test_pattern_set_sorted_and_levels() {
    let set: PatternSet<u32> = [
        Pattern::new([3], 2),
        Pattern::new([1, 3], 2),
        Pattern::new([1], 4),
        Pattern::new([1, 2], 3),
        Pattern::new([2], 3),
    ]
    .into_iter()
    .collect();

    let sorted: Vec<Vec<u32>> = set
        .clone()
        .into_sorted_vec()
        .into_iter()
        .map(|p| p.items.into_iter().collect())
        .collect();
    assert_eq!(sorted, vec![vec![1], vec![2], vec![3], vec![1, 2], vec![1, 3]]);

    let levels = set.levels();
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].itemset_size, 1);
    assert_eq!(levels[0].len(), 3);
    assert_eq!(levels[1].itemset_size, 2);
    assert_eq!(levels[1].len(), 2);
    assert_eq!(levels[1].get_itemset(0), &[1, 2]);
    assert_eq!(levels[1].support(0), 3);
    assert_eq!(levels[1].iter_itemsets().collect::<Vec<_>>(), vec![&[1, 2][..], &[1, 3][..]]);
}
