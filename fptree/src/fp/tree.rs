use std::collections::BTreeMap;
use std::hash::Hash;

/// Index of a node inside its tree's arena.
pub type NodeId = usize;

/// Capabilities an item needs to be mined: equality, a total order and a
/// stable hash. Implemented for every type that has them.
#[cfg(not(feature = "parallel"))]
pub trait Item: Clone + Ord + Hash {}

#[cfg(not(feature = "parallel"))]
impl<T: Clone + Ord + Hash> Item for T {}

/// Capabilities an item needs to be mined: equality, a total order and a
/// stable hash, plus thread safety for the per-item fan-out.
#[cfg(feature = "parallel")]
pub trait Item: Clone + Ord + Hash + Send + Sync {}

#[cfg(feature = "parallel")]
impl<T: Clone + Ord + Hash + Send + Sync> Item for T {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPNode<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub frequency: u64,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Items on the way from an occurrence node up to the root, nearest first,
/// weighted by the occurrence node's frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedPrefixPath<T> {
    pub items: Vec<T>,
    pub weight: u64,
}

/// A prefix tree over frequency-ordered transactions.
///
/// Nodes live in a single arena; the root sits at [`FPTree::ROOT`]. The
/// header table maps every frequent item to all nodes carrying it, in
/// creation order, and is what mining walks instead of node links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPTree<T> {
    pub nodes: Vec<FPNode<T>>,
    pub header_table: BTreeMap<T, Vec<NodeId>>,
    pub minimum_support_threshold: u64,
}

impl<T> FPNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            frequency: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn new_item(item: T, frequency: u64, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            frequency,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<T> TransformedPrefixPath<T> {
    pub fn new(items: Vec<T>, weight: u64) -> Self {
        Self { items, weight }
    }
}

impl<T: Item> FPTree<T> {
    pub const ROOT: NodeId = 0;

    /// A tree holding only the root.
    pub fn empty(minimum_support_threshold: u64) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: BTreeMap::new(),
            minimum_support_threshold,
        }
    }

    pub fn root(&self) -> &FPNode<T> {
        &self.nodes[Self::ROOT]
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Number of item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &FPNode<T> {
        &self.nodes[id]
    }

    /// Inserts an already filtered, ordered and deduplicated item sequence
    /// `weight` times.
    pub(crate) fn insert_transaction(&mut self, items: &[T], weight: u64) {
        let mut current = Self::ROOT;

        for item in items {
            let existing = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].item.as_ref() == Some(item));

            current = match existing {
                Some(child) => {
                    self.nodes[child].frequency += weight;
                    child
                }
                None => {
                    let new_index = self.nodes.len();
                    self.nodes
                        .push(FPNode::new_item(item.clone(), weight, current));
                    self.nodes[current].children.push(new_index);
                    self.header_table
                        .entry(item.clone())
                        .or_default()
                        .push(new_index);
                    new_index
                }
            };
        }
    }

    /// True when no node has more than one child. An empty tree counts as a
    /// (degenerate) single path.
    pub fn contains_single_path(&self) -> bool {
        self.is_empty() || self.is_single_path_from(Self::ROOT)
    }

    fn is_single_path_from(&self, id: NodeId) -> bool {
        match self.nodes[id].children.as_slice() {
            [] => true,
            [only] => self.is_single_path_from(*only),
            _ => false,
        }
    }

    /// Nodes from the root's first child down to a leaf, following the first
    /// child at every step. Only meaningful when
    /// [`contains_single_path`](Self::contains_single_path) holds.
    pub fn single_path(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Self::ROOT;

        while let Some(&child) = self.nodes[current].children.first() {
            debug_assert!(self.nodes[current].children.len() == 1);
            debug_assert!(current == Self::ROOT
                || self.nodes[child].frequency <= self.nodes[current].frequency);
            path.push(child);
            current = child;
        }
        path
    }

    /// Total support of `item`: the sum of frequencies of every node that
    /// carries it.
    pub fn item_support(&self, item: &T) -> u64 {
        self.header_table.get(item).map_or(0, |nodes| {
            nodes.iter().map(|&idx| self.nodes[idx].frequency).sum()
        })
    }

    /// Prefix paths of every occurrence of `item`. Occurrences hanging
    /// directly off the root have an empty prefix and are skipped.
    pub fn conditional_pattern_base(&self, item: &T) -> Vec<TransformedPrefixPath<T>> {
        let Some(occurrences) = self.header_table.get(item) else {
            return Vec::new();
        };

        occurrences
            .iter()
            .filter_map(|&idx| {
                let occurrence = &self.nodes[idx];
                let mut items = Vec::new();
                let mut current = occurrence.parent;

                while let Some(id) = current {
                    let node = &self.nodes[id];
                    let Some(node_item) = node.item.as_ref() else {
                        debug_assert!(node.is_root());
                        break;
                    };
                    debug_assert!(node.frequency >= occurrence.frequency);
                    items.push(node_item.clone());
                    current = node.parent;
                }

                (!items.is_empty())
                    .then(|| TransformedPrefixPath::new(items, occurrence.frequency))
            })
            .collect()
    }
}

/// Expands a conditional pattern base into plain transactions, each path
/// repeated `weight` times.
pub fn conditional_transactions<T: Clone>(base: &[TransformedPrefixPath<T>]) -> Vec<Vec<T>> {
    base.iter()
        .flat_map(|path| (0..path.weight).map(move |_| path.items.clone()))
        .collect()
}
