//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into an [`FPTree`](fp::FPTree), a prefix tree
//! whose paths share frequency-ordered item prefixes, and mined recursively
//! through per-item conditional trees.
//!
//! ```
//! use fptree::fp::fp_growth;
//!
//! let transactions = vec![vec!["a", "b"], vec!["b", "c"], vec!["a", "b", "c"]];
//! let patterns = fp_growth(&transactions, 2);
//!
//! assert_eq!(patterns.support(&["a", "b"].into()), Some(2));
//! assert_eq!(patterns.support(&["b"].into()), Some(3));
//! assert_eq!(patterns.len(), 5);
//! ```

pub mod fp;

#[cfg(feature = "python")]
mod python;

pub use fp::{fp_growth, fptree_growth, FPTree, Pattern, PatternSet};
