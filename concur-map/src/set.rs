//! Top-level facade selecting between the lock-free and lock-based
//! backends at construction time.

use concur_map_core::{Key, Variant};

use crate::config::TableConfig;
use crate::lockfree::LockFreeTable;
use crate::locked::LockedTable;

/// A concurrent set of `u64` keys, backed by either [`LockFreeTable`] or
/// [`LockedTable`] depending on the [`Variant`] chosen at construction.
///
/// Both backends expose the identical `insert`/`delete`/`contains`
/// contract and linearizable semantics; this is a thin dispatching
/// wrapper, the same shape as a top-level engine type that owns
/// configuration and delegates to a concrete subsystem.
pub enum ConcurrentSet {
    LockFree(LockFreeTable),
    Locked(LockedTable),
}

impl ConcurrentSet {
    pub fn new(variant: Variant, config: TableConfig) -> Self {
        match variant {
            Variant::LockFree => ConcurrentSet::LockFree(LockFreeTable::new(config.bucket_count)),
            Variant::Locked => ConcurrentSet::Locked(LockedTable::new(config.bucket_count)),
        }
    }

    /// Inserts `key`. Returns `false` if already present.
    pub fn insert(&self, key: Key) -> bool {
        match self {
            ConcurrentSet::LockFree(table) => table.insert(key),
            ConcurrentSet::Locked(table) => table.insert(key),
        }
    }

    /// Deletes `key`. Returns `false` if not present.
    pub fn delete(&self, key: Key) -> bool {
        match self {
            ConcurrentSet::LockFree(table) => table.delete(key),
            ConcurrentSet::Locked(table) => table.delete(key),
        }
    }

    /// Tests membership.
    pub fn contains(&self, key: Key) -> bool {
        match self {
            ConcurrentSet::LockFree(table) => table.contains(key),
            ConcurrentSet::Locked(table) => table.contains(key),
        }
    }

    /// Snapshot of every live key, used to check end-to-end driver
    /// scenarios and sortedness/no-lost-unlink invariants. Gated behind
    /// the `test-util` feature; not a public iteration API.
    #[doc(hidden)]
    #[cfg(any(test, feature = "test-util"))]
    pub fn snapshot(&self) -> std::collections::HashSet<Key> {
        match self {
            ConcurrentSet::LockFree(table) => table.snapshot(),
            ConcurrentSet::Locked(table) => table.snapshot(),
        }
    }
}
