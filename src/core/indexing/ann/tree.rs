// src/core/indexing/ann/tree.rs

//! The arena-backed tree shared by the KD and RP variants.

use log::{debug, trace};

use super::error::{AnnResult, AnnTreeError};
use super::iter::{BreadthFirstNodes, Vectors};
use super::node::{NodeId, TreeNode};
use super::split::{MedianSplitPolicy, RandomSplitPolicy, SplitPolicy, SplitRule};
use crate::core::config::AnnConfig;
use crate::core::types::DoubleVector;
use crate::core::vector::{EuclideanDistance, Metric};

/// Binary space-partitioning tree generalized over its split policy `P` and
/// distance metric `D`.
///
/// Every [`add`](super::AnnIndex::add) creates exactly one node, duplicates
/// included. Nodes live in a single arena in insertion order (until the next
/// [`balance`](super::AnnIndex::balance)); child links are arena indices.
/// The first insert fixes the dimension for all later inserts and queries.
#[derive(Debug, Clone)]
pub struct AnnTree<V, T, P, D = EuclideanDistance> {
    pub(crate) split_policy: P,
    pub(crate) distance: D,
    pub(crate) nodes: Vec<TreeNode<V, T>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) dimension: usize,
    pub(crate) size: usize,
    pub(crate) balance_on_construct: bool,
}

/// Median-split KD-tree.
pub type KdTree<V, T> = AnnTree<V, T, MedianSplitPolicy>;

/// Random projection tree.
pub type RpTree<V, T> = AnnTree<V, T, RandomSplitPolicy>;

/// Tree whose policy and metric were picked at runtime from an [`AnnConfig`].
pub type ConfiguredTree<V, T> = AnnTree<V, T, SplitRule, Metric>;

impl<V, T> AnnTree<V, T, MedianSplitPolicy> {
    /// Empty KD-tree using Euclidean distance.
    #[must_use]
    pub fn kd() -> Self {
        Self::new(MedianSplitPolicy::new())
    }
}

impl<V, T> AnnTree<V, T, RandomSplitPolicy> {
    /// Empty RP-tree using Euclidean distance and a seeded random policy.
    #[must_use]
    pub fn rp(seed: u64) -> Self {
        Self::new(RandomSplitPolicy::with_seed(seed))
    }
}

impl<V, T> AnnTree<V, T, SplitRule, Metric> {
    /// Builds an empty tree from configuration.
    ///
    /// # Errors
    /// Returns `OxiannError::Configuration` if `config` does not validate.
    pub fn from_config(config: &AnnConfig) -> crate::Result<Self> {
        config.validate()?;
        let split_policy = SplitRule::new(config.split_policy, config.seed);
        let mut tree = Self::with_distance(split_policy, config.distance);
        tree.balance_on_construct = config.balance_on_construct;
        Ok(tree)
    }
}

impl<V, T, P> AnnTree<V, T, P> {
    /// Empty tree using `split_policy` and Euclidean distance.
    pub const fn new(split_policy: P) -> Self {
        Self::with_distance(split_policy, EuclideanDistance)
    }
}

impl<V, T, P, D> AnnTree<V, T, P, D> {
    /// Empty tree with an explicit distance metric.
    pub const fn with_distance(split_policy: P, distance: D) -> Self {
        Self {
            split_policy,
            distance,
            nodes: Vec::new(),
            root: None,
            dimension: 0,
            size: 0,
            balance_on_construct: false,
        }
    }

    /// Dimension fixed by the first insert, `0` while the tree is empty.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub const fn split_policy(&self) -> &P {
        &self.split_policy
    }

    pub const fn distance(&self) -> &D {
        &self.distance
    }

    /// Whether bulk construction balances the tree once it finishes.
    pub const fn balances_on_construct(&self) -> bool {
        self.balance_on_construct
    }

    pub fn set_balance_on_construct(&mut self, enabled: bool) {
        self.balance_on_construct = enabled;
    }

    /// Lazy breadth-first traversal over the stored vectors.
    pub fn iter(&self) -> Vectors<'_, V, T> {
        Vectors::new(self.iter_nodes())
    }

    /// Breadth-first traversal over the nodes themselves.
    pub(crate) fn iter_nodes(&self) -> BreadthFirstNodes<'_, V, T> {
        BreadthFirstNodes::new(&self.nodes, self.root)
    }

    /// Checks a query vector against the tree. `Ok(false)` means the tree is
    /// empty and every query trivially has no hits.
    pub(crate) fn validate_query<Q>(&self, query: &Q) -> AnnResult<bool>
    where
        Q: DoubleVector + ?Sized,
    {
        if query.dimension() == 0 {
            return Err(AnnTreeError::InvalidVector(
                "query dimension can't be zero".to_string(),
            ));
        }
        if self.root.is_none() {
            return Ok(false);
        }
        if query.dimension() != self.dimension {
            return Err(AnnTreeError::DimensionMismatch {
                expected: self.dimension,
                actual: query.dimension(),
            });
        }
        Ok(true)
    }

    /// Number of levels on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| [self.nodes[id].left, self.nodes[id].right])
                .flatten()
                .collect();
        }
        height
    }
}

impl<V, T, P, D> AnnTree<V, T, P, D>
where
    V: DoubleVector,
    P: SplitPolicy<V, T>,
{
    /// Validates and inserts `vector`, returning the new node's arena index.
    ///
    /// Nothing is mutated unless every precondition holds.
    pub(crate) fn insert(&mut self, vector: V, value: Option<T>) -> AnnResult<NodeId> {
        self.validate_vector(&vector)?;

        let (parent, level) = match self.root {
            None => (None, 0),
            Some(root) => {
                let (parent, right, level) = self.find_free_slot(root, &vector);
                (Some((parent, right)), level)
            }
        };

        let split_dimension = self.split_policy.split_dimension(&vector, level, &self.nodes);
        if split_dimension >= vector.dimension() {
            return Err(AnnTreeError::InvalidSplitDimension {
                index: split_dimension,
                dimension: vector.dimension(),
            });
        }

        self.dimension = vector.dimension();
        self.size += 1;

        let id = self.nodes.len();
        self.nodes.push(TreeNode::new(split_dimension, vector, value));
        match parent {
            None => self.root = Some(id),
            Some((parent, true)) => self.nodes[parent].right = Some(id),
            Some((parent, false)) => self.nodes[parent].left = Some(id),
        }
        trace!("inserted node {id} at level {level} splitting on dimension {split_dimension}");
        debug_assert_eq!(self.size, self.nodes.len());
        Ok(id)
    }

    /// Walks down from `root` to the first missing child slot. Returns the
    /// parent, whether the slot is its right child, and the parent's depth.
    /// Values equal to a node's split value go right.
    fn find_free_slot(&self, root: NodeId, vector: &V) -> (NodeId, bool, usize) {
        let mut current = root;
        let mut level = 0;
        loop {
            let node = &self.nodes[current];
            let right = node.split_value() <= vector.get(node.split_dimension);
            let next = if right { node.right } else { node.left };
            match next {
                Some(next) => {
                    current = next;
                    level += 1;
                }
                None => return (current, right, level),
            }
        }
    }

    fn validate_vector(&self, vector: &V) -> AnnResult<()> {
        if vector.dimension() == 0 {
            return Err(AnnTreeError::InvalidVector(
                "vector dimension can't be zero".to_string(),
            ));
        }
        if self.dimension != 0 && self.dimension != vector.dimension() {
            return Err(AnnTreeError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.dimension(),
            });
        }
        Ok(())
    }

    /// Replays single inserts in input order, then balances if configured to.
    /// Stops at the first rejected vector; earlier inserts stay in the tree.
    pub(crate) fn construct<I>(&mut self, pairs: I) -> AnnResult<()>
    where
        I: IntoIterator<Item = (V, Option<T>)>,
    {
        for (vector, value) in pairs {
            self.insert(vector, value)?;
        }
        if self.balance_on_construct {
            self.rebalance();
        }
        Ok(())
    }

    /// Sorts the arena by each node's split value and rebuilds the links by
    /// recursive bisection. Split dimensions are kept as assigned at insert.
    pub(crate) fn rebalance(&mut self) {
        self.nodes.sort_by(|a, b| a.split_value().total_cmp(&b.split_value()));
        let len = self.nodes.len();
        self.root = Self::fix(&mut self.nodes, 0, len);
        debug!("balanced tree of {} nodes to height {}", self.size, self.height());
    }

    /// Links `nodes[start..end]` into a subtree rooted at its middle element.
    fn fix(nodes: &mut [TreeNode<V, T>], start: usize, end: usize) -> Option<NodeId> {
        if start >= end {
            return None;
        }
        let mid = (start + end - 1) / 2;
        let left = Self::fix(nodes, start, mid);
        let right = Self::fix(nodes, mid + 1, end);
        nodes[mid].left = left;
        nodes[mid].right = right;
        Some(mid)
    }
}

impl<'a, V, T, P, D> IntoIterator for &'a AnnTree<V, T, P, D> {
    type Item = &'a V;
    type IntoIter = Vectors<'a, V, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
