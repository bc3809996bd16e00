//! Fixed-width bucket array dispatching by `key % bucket_count` to
//! independent [`LockedList`]s. Buckets have independent locks, so
//! operations on distinct buckets proceed in parallel; operations on the
//! same bucket serialize.

use concur_map_core::Key;

use super::list::LockedList;

pub struct LockedTable {
    buckets: Vec<LockedList>,
}

impl LockedTable {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be positive");
        let buckets = (0..bucket_count).map(|_| LockedList::new()).collect();
        Self { buckets }
    }

    fn bucket(&self, key: Key) -> &LockedList {
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
