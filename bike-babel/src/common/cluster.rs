//! Run clustering over ordered sequences.
//!
//! The bike transformer groups consecutive rows of the same `data-type` so
//! that, say, four adjacent unordered rows become one bullet list instead of
//! four. The algorithms here are generic: cluster a sequence into maximal
//! runs of equal key, then optionally break up the runs that should be
//! handled one element at a time.

/// Cluster runs of consecutive elements based on a key function.
///
/// A new cluster starts whenever the element's key differs from the key of
/// the *first* element of the current cluster (not the immediately preceding
/// element). Concatenating the returned clusters in order reproduces the
/// input sequence exactly.
pub fn cluster_runs<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<Vec<T>>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut clusters: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();

    for elem in items {
        if current.is_empty() || key(&elem) == key(&current[0]) {
            current.push(elem);
        } else {
            clusters.push(std::mem::take(&mut current));
            current.push(elem);
        }
    }

    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}

/// Filter clusters with a predicate, breaking up the rest.
///
/// Clusters satisfying `keep` pass through unchanged; clusters that fail are
/// exploded into singleton clusters, one per element, preserving order.
pub fn keep_clusters<T, F>(clusters: Vec<Vec<T>>, keep: F) -> Vec<Vec<T>>
where
    F: Fn(&[T]) -> bool,
{
    let mut filtered: Vec<Vec<T>> = Vec::new();

    for cluster in clusters {
        if keep(&cluster) {
            filtered.push(cluster);
        } else {
            for elem in cluster {
                filtered.push(vec![elem]);
            }
        }
    }

    filtered
}
