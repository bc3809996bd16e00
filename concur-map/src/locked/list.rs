//! Sorted singly-linked list protected by a single exclusive lock.
//!
//! Simpler than the lock-free list by construction: every operation holds
//! `head` for its whole critical section, so there is no concurrent
//! unlinking to reason about and no marked-but-not-yet-unlinked state.

use concur_map_core::Key;
use parking_lot::Mutex;

struct LockedNode {
    key: Key,
    next: Option<Box<LockedNode>>,
}

/// A sorted singly-linked list of `Key`s, guarded by one
/// [`parking_lot::Mutex`].
///
/// Unlike the lock-free variant there is no head sentinel node: the first
/// real node, if any, is held directly by the lock. This avoids the
/// source's bug where the locked list's head sentinel carries key `0`,
/// colliding with any caller inserting key `0` (see the crate's design
/// notes); key `0` is an ordinary, insertable key here.
pub struct LockedList {
    head: Mutex<Option<Box<LockedNode>>>,
}

impl LockedList {
    pub fn new() -> Self {
        Self {
            head: Mutex::new(None),
        }
    }

    /// Inserts `key` in sorted position. Returns `false` if already
    /// present. Linearized at lock acquisition.
    pub fn insert(&self, key: Key) -> bool {
        let mut guard = self.head.lock();
        let mut current = &mut *guard;
        loop {
            match current {
                Some(node) if node.key == key => return false,
                Some(node) if node.key < key => {
                    current = &mut node.next;
                }
                _ => {
                    let new_node = Box::new(LockedNode {
                        key,
                        next: current.take(),
                    });
                    *current = Some(new_node);
                    return true;
                }
            }
        }
    }

    /// Deletes `key`. Returns `false` if not present. Linearized at lock
    /// acquisition.
    pub fn delete(&self, key: Key) -> bool {
        let mut guard = self.head.lock();
        let mut current = &mut *guard;
        loop {
            match current {
                Some(node) if node.key == key => {
                    *current = node.next.take();
                    return true;
                }
                Some(node) if node.key < key => {
                    current = &mut node.next;
                }
                _ => return false,
            }
        }
    }

    /// Tests membership. Linearized at lock acquisition.
    pub fn contains(&self, key: Key) -> bool {
        let guard = self.head.lock();
        let mut current = guard.as_deref();
        while let Some(node) = current {
            if node.key == key {
                return true;
            }
            if node.key > key {
                return false;
            }
            current = node.next.as_deref();
        }
        false
    }

    #[doc(hidden)]
    #[cfg(any(test, feature = "test-util"))]
    pub fn snapshot(&self) -> Vec<Key> {
        let guard = self.head.lock();
        let mut out = Vec::new();
        let mut current = guard.as_deref();
        while let Some(node) = current {
            out.push(node.key);
            current = node.next.as_deref();
        }
        out
    }
}

impl Default for LockedList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_contains_nothing() {
        let list = LockedList::new();
        assert!(!list.contains(5));
    }

    #[test]
    fn zero_is_an_ordinary_insertable_key() {
        let list = LockedList::new();
        assert!(list.insert(0));
        assert!(list.contains(0));
    }

    #[test]
    fn insert_then_contains() {
        let list = LockedList::new();
        assert!(list.insert(42));
        assert!(list.contains(42));
    }

    #[test]
    fn duplicate_insert_returns_false() {
        let list = LockedList::new();
        assert!(list.insert(10));
        assert!(!list.insert(10));
        assert!(list.contains(10));
    }

    #[test]
    fn delete_absent_key_returns_false() {
        let list = LockedList::new();
        assert!(!list.delete(99));
    }

    #[test]
    fn delete_present_key_removes_it() {
        let list = LockedList::new();
        assert!(list.insert(7));
        assert!(list.delete(7));
        assert!(!list.contains(7));
    }

    #[test]
    fn keys_stay_sorted_after_interleaved_ops() {
        let list = LockedList::new();
        for k in [5, 1, 9, 3, 7] {
            list.insert(k);
        }
        list.delete(9);
        let snapshot = list.snapshot();
        let mut sorted = snapshot.clone();
        sorted.sort_unstable();
        assert_eq!(snapshot, sorted);
        assert_eq!(snapshot, vec![1, 3, 5, 7]);
    }

    #[test]
    fn concurrent_insert_of_same_key_has_exactly_one_winner() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let list = LockedList::new();
        let wins = AtomicUsize::new(0);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    if list.insert(123) {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });
        assert_eq!(wins.load(Ordering::SeqCst), 1);
        assert!(list.contains(123));
    }
}
