//! Property tests for the run-clustering algorithms.

use bike_babel::common::cluster::{cluster_runs, keep_clusters};
use proptest::prelude::*;

proptest! {
    /// Concatenating all clusters in order reproduces the input exactly.
    #[test]
    fn cluster_concat_reproduces_input(items in proptest::collection::vec(0u8..5, 0..64)) {
        let clusters = cluster_runs(items.clone(), |x| *x);
        let rebuilt: Vec<u8> = clusters.into_iter().flatten().collect();
        prop_assert_eq!(rebuilt, items);
    }

    /// Runs are maximal: adjacent clusters never share a key, and every
    /// cluster is internally uniform.
    #[test]
    fn clusters_are_maximal_runs(items in proptest::collection::vec(0u8..5, 0..64)) {
        let clusters = cluster_runs(items, |x| *x);
        for cluster in &clusters {
            prop_assert!(!cluster.is_empty());
            prop_assert!(cluster.iter().all(|x| x == &cluster[0]));
        }
        for pair in clusters.windows(2) {
            prop_assert_ne!(pair[0][0], pair[1][0]);
        }
    }

    /// Exploding rejected clusters loses no elements and keeps order.
    #[test]
    fn keep_clusters_preserves_sequence(items in proptest::collection::vec(0u8..5, 0..64)) {
        let clusters = cluster_runs(items.clone(), |x| *x);
        let filtered = keep_clusters(clusters, |c| c[0] % 2 == 0);
        let rebuilt: Vec<u8> = filtered.iter().flatten().copied().collect();
        prop_assert_eq!(rebuilt, items);

        // Rejected keys only ever appear as singletons
        for cluster in &filtered {
            if cluster[0] % 2 != 0 {
                prop_assert_eq!(cluster.len(), 1);
            }
        }
    }
}
