//! Fixed-width bucket array dispatching by `key % bucket_count` to
//! independent [`LockFreeList`]s.
//!
//! The source threads every bucket's head sentinel into bucket 0's list
//! (recursive split-ordering) so that a future resize could reuse them.
//! Resizing is out of scope here (see the crate's design notes), so each
//! bucket instead owns its own independent list with its own sentinels,
//! a documented simplification, not a behavioral difference for any of
//! insert/delete/contains.

use concur_map_core::Key;

use super::list::LockFreeList;

pub struct LockFreeTable {
    buckets: Vec<LockFreeList>,
}

impl LockFreeTable {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be positive");
        let buckets = (0..bucket_count).map(|_| LockFreeList::new()).collect();
        Self { buckets }
    }

    fn bucket(&self, key: Key) -> &LockFreeList {
        &self.buckets[(key % self.buckets.len() as Key) as usize]
    }

    pub fn insert(&self, key: Key) -> bool {
        self.bucket(key).insert(key)
    }

    pub fn delete(&self, key: Key) -> bool {
        self.bucket(key).delete(key)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.bucket(key).contains(key)
    }

    #[doc(hidden)]
    #[cfg(any(test, feature = "test-util"))]
    pub fn snapshot(&self) -> std::collections::HashSet<Key> {
        self.buckets.iter().flat_map(|b| b.snapshot()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_key_modulo_bucket_count() {
        let table = LockFreeTable::new(4);
        assert!(table.insert(10));
        assert!(table.contains(10));
        assert!(!table.insert(10));
        assert!(table.delete(10));
        assert!(!table.contains(10));
    }

    #[test]
    fn distinct_buckets_hold_distinct_keys() {
        let table = LockFreeTable::new(8);
        for k in 0..100u64 {
            table.insert(k);
        }
        let snapshot = table.snapshot();
        assert_eq!(snapshot.len(), 100);
        for k in 0..100u64 {
            assert!(snapshot.contains(&k));
        }
    }
}
