use std::sync::{OnceLock, RwLock};

use crate::hash::{empty_leaf_hash, node_hash, Hash};

/// Memoized roots of all-empty subtrees, indexed by rank.
///
/// Entry `r` is the root of a tree of `2^r` sentinel leaves; entry 0 is the
/// bare sentinel leaf hash and entry `r + 1` is always
/// `node_hash(entry[r], entry[r])`. The verifier consumes these values as
/// pre-agreed constants when doubling a collection's capacity, so a tree of
/// `2^(k+1)` empty-padded slots never has to be rehashed leaf by leaf.
///
/// The table is append-only and every entry is a pure function of the lower
/// ranks, so concurrent readers and writers need no coordination beyond the
/// lock; recomputing an entry always yields the same value.
pub struct EmptyRootCache {
    roots: RwLock<Vec<Hash>>,
}

impl EmptyRootCache {
    /// Creates a cache seeded with the rank-0 entry.
    pub fn new() -> Self {
        Self {
            roots: RwLock::new(vec![empty_leaf_hash()]),
        }
    }

    /// Process-wide shared instance.
    pub fn shared() -> &'static EmptyRootCache {
        static SHARED: OnceLock<EmptyRootCache> = OnceLock::new();
        SHARED.get_or_init(EmptyRootCache::new)
    }

    /// Root of a tree of `2^rank` sentinel leaves, extending the table on
    /// first use.
    pub fn root(&self, rank: usize) -> Hash {
        {
            // Entries are deterministic, so a poisoned lock still guards
            // valid data and can be recovered.
            let roots = self
                .roots
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(root) = roots.get(rank) {
                return *root;
            }
        }

        let mut roots = self
            .roots
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        while roots.len() <= rank {
            let top = roots[roots.len() - 1];
            roots.push(node_hash(&top, &top));
        }
        roots[rank]
    }

    /// Returns the first `len` entries, ranks `0..len`.
    pub fn table(&self, len: usize) -> Vec<Hash> {
        if len == 0 {
            return Vec::new();
        }
        self.root(len - 1);
        let roots = self
            .roots
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        roots[..len].to_vec()
    }
}

impl Default for EmptyRootCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::EpochTag;
    use crate::leaf::EMPTY_LEAF;
    use crate::merkle::tree::merkle_root;

    #[test]
    fn rank_zero_is_sentinel_leaf_hash() {
        assert_eq!(EmptyRootCache::new().root(0), empty_leaf_hash());
    }

    #[test]
    fn doubling_recurrence_holds() {
        let cache = EmptyRootCache::new();
        let table = cache.table(8);
        for rank in 0..7 {
            assert_eq!(table[rank + 1], node_hash(&table[rank], &table[rank]));
        }
    }

    #[test]
    fn entries_match_explicit_trees() {
        let cache = EmptyRootCache::new();
        for rank in 0..5usize {
            let leaves = vec![EMPTY_LEAF; 1 << rank];
            let direct = merkle_root(&leaves, EpochTag::from_unix_millis(0)).unwrap();
            assert_eq!(cache.root(rank), direct, "rank {rank}");
        }
    }

    #[test]
    fn shared_instance_agrees_with_fresh_cache() {
        assert_eq!(EmptyRootCache::shared().root(6), EmptyRootCache::new().root(6));
    }

    #[test]
    fn empty_table_request_is_empty() {
        assert!(EmptyRootCache::new().table(0).is_empty());
    }

    #[test]
    fn out_of_order_lookups_backfill() {
        let cache = EmptyRootCache::new();
        let high = cache.root(5);
        let low = cache.root(2);
        assert_eq!(cache.table(6), {
            let fresh = EmptyRootCache::new();
            fresh.table(6)
        });
        assert_eq!(cache.root(5), high);
        assert_eq!(cache.root(2), low);
    }
}
