pub mod builder;
pub mod combinations;
pub mod mining;
pub mod storage;
pub mod support;
pub mod tree;

#[cfg(test)]
mod tests;

pub use builder::{count_frequencies, frequency_order};
pub use mining::{fp_growth, fp_growth_with, fptree_growth};
pub use storage::{FrequentLevel, Itemset, Pattern, PatternSet};
pub use support::{MinimumSupport, SupportError};
pub use tree::{conditional_transactions, FPNode, FPTree, Item, NodeId, TransformedPrefixPath};
