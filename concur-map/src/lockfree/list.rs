//! Harris/Michael lock-free sorted linked list with mark-based logical
//! deletion.
//!
//! Algorithm: Harris's linked list with Michael's lazy physical unlink.
//! Two permanent sentinels bound the list: `head` (key `0`) and `tail`
//! (key `u64::MAX`); real keys are stored strictly between them in
//! ascending order.

use concur_map_core::Key;
use crossbeam::epoch::{self, Atomic, Guard, Owned, Shared};
use log::trace;
use std::sync::atomic::Ordering;

use super::marked_ref::MarkedRef;

const TAIL_KEY: Key = Key::MAX;

pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) next: MarkedRef<Node>,
}

impl Node {
    fn new(key: Key) -> Self {
        Self {
            key,
            next: MarkedRef::null(),
        }
    }
}

/// A sorted singly-linked list of `Key`s supporting lock-free
/// insert/delete/contains.
pub struct LockFreeList {
    head: Atomic<Node>,
}

impl LockFreeList {
    pub fn new() -> Self {
        let guard = &epoch::pin();
        let tail = Owned::new(Node::new(TAIL_KEY)).into_shared(guard);
        let head = Owned::new(Node::new(0));
        head.next.store_plain(tail, false);
        Self {
            head: Atomic::from(head),
        }
    }

    /// Returns the adjacent unmarked `(pred, curr)` pair such that
    /// `pred.key < key <= curr.key`, physically unlinking any marked node
    /// encountered along the way. Restarts from `head` if an unlink CAS
    /// loses a race, since a failed unlink may mean `pred` itself was just
    /// marked by another thread.
    fn find<'g>(&self, key: Key, guard: &'g Guard) -> (Shared<'g, Node>, Shared<'g, Node>) {
        'retry: loop {
            let mut pred = self.head.load(Ordering::Acquire, guard);
            // SAFETY: head is allocated once in `new` and never freed
            // while `self` is alive.
            let mut curr = unsafe { pred.deref() }.next.reference(guard);

            loop {
                let (mut succ, mut marked) = unsafe { curr.deref() }.next.load(guard);

                while marked {
                    let unlinked =
                        unsafe { pred.deref() }
                            .next
                            .compare_and_set(curr, false, succ, false, guard);
                    if !unlinked {
                        trace!("lockfree list: unlink CAS lost, restarting find from head");
                        continue 'retry;
                    }
                    // SAFETY: no other thread can still reach `curr` once
                    // the unlink CAS above has taken effect.
                    unsafe { guard.defer_destroy(curr) };
                    curr = succ;
                    let next = unsafe { curr.deref() }.next.load(guard);
                    succ = next.0;
                    marked = next.1;
                }

                if unsafe { curr.deref() }.key >= key {
                    return (pred, curr);
                }
                pred = curr;
                curr = succ;
            }
        }
    }

    /// Inserts `key`. Returns `false` if already present.
    pub fn insert(&self, key: Key) -> bool {
        let guard = &epoch::pin();
        let mut new_node = Owned::new(Node::new(key));
        loop {
            let (pred, curr) = self.find(key, guard);
            if unsafe { curr.deref() }.key == key {
                return false;
            }
            new_node.next.store_plain(curr, false);
            match unsafe { pred.deref() }
                .next
                .compare_and_set_owned(curr, false, new_node, false, guard)
            {
                Ok(_) => return true,
                Err(returned) => {
                    trace!("lockfree list: insert CAS lost, retrying");
                    new_node = returned;
                }
            }
        }
    }

    /// Deletes `key`. Returns `false` if not present.
    pub fn delete(&self, key: Key) -> bool {
        let guard = &epoch::pin();
        loop {
            let (pred, curr) = self.find(key, guard);
            let curr_node = unsafe { curr.deref() };
            if curr_node.key != key {
                return false;
            }
            let (succ, _marked) = curr_node.next.load(guard);
            if !curr_node
                .next
                .compare_and_set(succ, false, succ, true, guard)
            {
                trace!("lockfree list: delete CAS lost, retrying");
                continue;
            }
            // Best-effort physical unlink; a future `find` will finish the
            // job if this loses a race, so the outcome doesn't affect
            // correctness.
            if unsafe { pred.deref() }
                .next
                .compare_and_set(curr, false, succ, false, guard)
            {
                unsafe { guard.defer_destroy(curr) };
            }
            return true;
        }
    }

    /// Wait-free membership test: walks `.reference()` hops without
    /// unlinking, then re-checks the mark bit at the landing node.
    pub fn contains(&self, key: Key) -> bool {
        let guard = &epoch::pin();
        let head = self.head.load(Ordering::Acquire, guard);
        let mut curr = unsafe { head.deref() }.next.reference(guard);
        while unsafe { curr.deref() }.key < key {
            curr = unsafe { curr.deref() }.next.reference(guard);
        }
        let curr_node = unsafe { curr.deref() };
        curr_node.key == key && !curr_node.next.mark(guard)
    }

    /// Iterates every unmarked key in ascending order. Gated behind the
    /// `test-util` feature; not part of the ordinary `insert`/`delete`/
    /// `contains` contract.
    #[doc(hidden)]
    #[cfg(any(test, feature = "test-util"))]
    pub fn snapshot(&self) -> Vec<Key> {
        let guard = &epoch::pin();
        let head = self.head.load(Ordering::Acquire, guard);
        let mut curr = unsafe { head.deref() }.next.reference(guard);
        let mut out = Vec::new();
        loop {
            let node = unsafe { curr.deref() };
            if node.key == TAIL_KEY {
                break;
            }
            if !node.next.mark(guard) {
                out.push(node.key);
            }
            curr = node.next.reference(guard);
        }
        out
    }
}

impl Default for LockFreeList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LockFreeList {
    fn drop(&mut self) {
        // SAFETY: `&mut self` means no other thread holds a reference to
        // this list, so an unprotected (unguarded) walk is sound.
        unsafe {
            let guard = epoch::unprotected();
            let mut curr = self.head.load(Ordering::Relaxed, guard);
            while !curr.is_null() {
                let next = curr.deref().next.reference(guard);
                drop(curr.into_owned());
                curr = next;
            }
        }
    }
}
