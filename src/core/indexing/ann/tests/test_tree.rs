// src/core/indexing/ann/tests/test_tree.rs

#[cfg(test)]
mod tree_tests {
    use crate::core::config::AnnConfig;
    use crate::core::indexing::ann::tests::{dense, sparse, POINTS_2D};
    use crate::core::indexing::ann::{
        AnnIndex, AnnTree, AnnTreeError, ConfiguredTree, KdTree, MedianSplitPolicy, RpTree,
        SplitPolicy, SplitPolicyKind, TreeNode,
    };
    use crate::core::types::{DenseVector, DoubleVector, SparseVector};
    use crate::core::vector::Metric;

    fn kd_2d() -> KdTree<DenseVector, ()> {
        let mut tree: KdTree<DenseVector, ()> = AnnTree::kd();
        tree.construct_from_vectors(POINTS_2D.iter().map(|p| dense(p))).unwrap();
        tree
    }

    fn bfs<V: DoubleVector, T, P, D>(tree: &AnnTree<V, T, P, D>) -> Vec<Vec<f64>> {
        tree.iter().map(|v| (0..v.dimension()).map(|i| v.get(i)).collect()).collect()
    }

    fn one_d(values: &[f64]) -> KdTree<DenseVector, ()> {
        let mut tree: KdTree<DenseVector, ()> = AnnTree::kd();
        tree.construct_from_vectors(values.iter().map(|v| dense(&[*v]))).unwrap();
        tree
    }

    /// Always answers with an axis one past the end.
    struct OutOfRange;

    impl<V: DoubleVector, T> SplitPolicy<V, T> for OutOfRange {
        fn split_dimension(
            &mut self,
            vector: &V,
            _level: usize,
            _nodes: &[TreeNode<V, T>],
        ) -> usize {
            vector.dimension()
        }
    }

    /// Behaves like a median split for the first `good` inserts, then breaks.
    struct BreaksAfter {
        good: usize,
        seen: usize,
    }

    impl<V: DoubleVector, T> SplitPolicy<V, T> for BreaksAfter {
        fn split_dimension(&mut self, vector: &V, level: usize, nodes: &[TreeNode<V, T>]) -> usize {
            self.seen += 1;
            if self.seen > self.good {
                return vector.dimension() + 3;
            }
            MedianSplitPolicy.split_dimension(vector, level, nodes)
        }
    }

    #[test]
    fn test_insert_order_breadth_first() {
        let tree = kd_2d();
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.dimension(), 2);
        assert_eq!(
            bfs(&tree),
            vec![
                vec![2.0, 3.0],
                vec![8.0, 1.0],
                vec![5.0, 4.0],
                vec![7.0, 2.0],
                vec![4.0, 7.0],
                vec![9.0, 6.0],
            ]
        );
    }

    #[test]
    fn test_insert_order_breadth_first_sparse() {
        let mut tree: KdTree<SparseVector, ()> = AnnTree::kd();
        tree.construct_from_vectors(POINTS_2D.iter().map(|p| sparse(p))).unwrap();
        let first: Vec<f64> = bfs(&tree).into_iter().map(|v| v[0]).collect();
        assert_eq!(first, vec![2.0, 8.0, 5.0, 7.0, 4.0, 9.0]);
    }

    #[test]
    fn test_equal_split_value_goes_right() {
        let tree = one_d(&[5.0, 5.0]);
        let root = tree.root.unwrap();
        assert!(tree.nodes[root].left.is_none());
        assert!(tree.nodes[root].right.is_some());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut tree: KdTree<DenseVector, &str> = AnnTree::kd();
        for _ in 0..4 {
            tree.add(dense(&[1.0, 1.0]), Some("dup")).unwrap();
        }
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.iter().count(), 4);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn test_size_matches_arena() {
        let tree = kd_2d();
        assert_eq!(tree.size(), tree.nodes.len());
        assert_eq!(tree.iter_nodes().count(), tree.size());
    }

    #[test]
    fn test_empty_tree() {
        let tree: KdTree<DenseVector, ()> = AnnTree::kd();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.dimension(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_zero_dimension_vector_rejected() {
        let mut tree: KdTree<DenseVector, ()> = AnnTree::kd();
        let err = tree.add(DenseVector::new(Vec::new()), None).unwrap_err();
        assert!(matches!(err, AnnTreeError::InvalidVector(_)));
        assert!(tree.is_empty());

        tree.add(dense(&[1.0]), None).unwrap();
        let err = tree.add(DenseVector::new(Vec::new()), None).unwrap_err();
        assert!(matches!(err, AnnTreeError::InvalidVector(_)));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut tree = kd_2d();
        let err = tree.add(dense(&[1.0, 2.0, 3.0]), None).unwrap_err();
        assert_eq!(err, AnnTreeError::DimensionMismatch { expected: 2, actual: 3 });
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.nodes.len(), 6);
    }

    #[test]
    fn test_invalid_split_dimension_leaves_tree_untouched() {
        let mut tree: AnnTree<DenseVector, (), OutOfRange> = AnnTree::new(OutOfRange);
        let err = tree.add(dense(&[1.0, 2.0]), None).unwrap_err();
        assert_eq!(err, AnnTreeError::InvalidSplitDimension { index: 2, dimension: 2 });
        assert!(tree.is_empty());
        assert_eq!(tree.dimension(), 0);
        assert!(tree.root.is_none());
    }

    #[test]
    fn test_construct_stops_at_first_failure() {
        let mut tree: AnnTree<DenseVector, (), BreaksAfter> =
            AnnTree::new(BreaksAfter { good: 3, seen: 0 });
        let err = tree.construct_from_vectors(POINTS_2D.iter().map(|p| dense(p))).unwrap_err();
        assert!(matches!(err, AnnTreeError::InvalidSplitDimension { index: 5, dimension: 2 }));
        assert_eq!(tree.size(), 3);
        assert_eq!(bfs(&tree), vec![vec![2.0, 3.0], vec![5.0, 4.0], vec![9.0, 6.0]]);
    }

    #[test]
    fn test_balance_one_dimensional() {
        let mut tree = one_d(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(tree.height(), 7);
        tree.balance();
        let order: Vec<f64> = bfs(&tree).into_iter().map(|v| v[0]).collect();
        assert_eq!(order, vec![4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.size(), 7);
    }

    #[test]
    fn test_balance_is_idempotent() {
        let mut tree = kd_2d();
        tree.balance();
        let once = bfs(&tree);
        let links: Vec<_> = tree.nodes.iter().map(|n| (n.left, n.right)).collect();
        tree.balance();
        assert_eq!(bfs(&tree), once);
        let again: Vec<_> = tree.nodes.iter().map(|n| (n.left, n.right)).collect();
        assert_eq!(again, links);
    }

    #[test]
    fn test_balance_keeps_split_dimensions() {
        let mut tree = kd_2d();
        let splits = |nodes: &[TreeNode<DenseVector, ()>]| -> Vec<(Vec<f64>, usize)> {
            nodes.iter().map(|n| (n.key_vector.as_slice().to_vec(), n.split_dimension)).collect()
        };
        let mut before = splits(&tree.nodes);
        tree.balance();
        let mut after = splits(&tree.nodes);
        before.sort_by(|a, b| a.0[0].total_cmp(&b.0[0]));
        after.sort_by(|a, b| a.0[0].total_cmp(&b.0[0]));
        assert_eq!(before, after);
    }

    #[test]
    fn test_balance_height_is_minimal() {
        for n in [1usize, 2, 3, 15, 16, 100] {
            let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let mut tree = one_d(&values);
            tree.balance();
            let expected = usize::BITS - n.leading_zeros();
            assert_eq!(tree.height(), expected as usize, "n = {n}");
            assert_eq!(tree.iter().count(), n);
        }
    }

    #[test]
    fn test_balance_empty_tree() {
        let mut tree: KdTree<DenseVector, ()> = AnnTree::kd();
        tree.balance();
        assert!(tree.root.is_none());
    }

    #[test]
    fn test_balance_on_construct() {
        let mut tree: KdTree<DenseVector, ()> = AnnTree::kd();
        tree.set_balance_on_construct(true);
        assert!(tree.balances_on_construct());
        tree.construct_from_vectors((1..=7).map(|v| dense(&[f64::from(v)]))).unwrap();
        let order: Vec<f64> = bfs(&tree).into_iter().map(|v| v[0]).collect();
        assert_eq!(order, vec![4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_construct_with_payload() {
        let mut tree: KdTree<DenseVector, usize> = AnnTree::kd();
        let pairs = POINTS_2D.iter().enumerate().map(|(i, p)| (dense(p), i));
        tree.construct_with_payload(pairs).unwrap();
        let payloads: Vec<usize> = tree.iter_nodes().filter_map(|n| n.value().copied()).collect();
        assert_eq!(payloads, vec![0, 4, 1, 5, 3, 2]);
    }

    #[test]
    fn test_rp_tree_is_deterministic_per_seed() {
        let build = |seed| {
            let mut tree: RpTree<DenseVector, ()> = AnnTree::rp(seed);
            tree.construct_from_vectors((0..50).map(|i| {
                let x = f64::from(i);
                dense(&[x, (x * 7.0) % 11.0, (x * 3.0) % 5.0, 50.0 - x])
            }))
            .unwrap();
            tree.iter_nodes().map(|n| n.split_dimension()).collect::<Vec<_>>()
        };
        assert_eq!(build(42), build(42));
        assert!(build(42).iter().all(|d| *d < 4));
    }

    #[test]
    fn test_from_config() {
        let config = AnnConfig::builder()
            .split_policy(SplitPolicyKind::Random)
            .seed(9)
            .distance(Metric::Manhattan)
            .balance_on_construct(true)
            .build()
            .unwrap();
        let mut tree: ConfiguredTree<DenseVector, ()> = AnnTree::from_config(&config).unwrap();
        assert_eq!(tree.split_policy().kind(), SplitPolicyKind::Random);
        assert_eq!(*tree.distance(), Metric::Manhattan);
        assert!(tree.balances_on_construct());

        tree.construct_from_vectors((1..=7).map(|v| dense(&[f64::from(v)]))).unwrap();
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = AnnConfig { seed: Some(1), ..AnnConfig::default() };
        assert!(ConfiguredTree::<DenseVector, ()>::from_config(&config).is_err());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let tree = kd_2d();
        let mut count = 0;
        for v in &tree {
            assert_eq!(v.dimension(), 2);
            count += 1;
        }
        assert_eq!(count, 6);
    }
}
