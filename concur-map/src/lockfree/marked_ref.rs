//! `MarkedRef`: a single atomic word carrying a node reference and a
//! one-bit logical-deletion mark, updated jointly by CAS.
//!
//! Packing `(reference, mark)` into one word is the crux of the Harris
//! list: a thread must never observe a reference and a mark that were
//! written by two separate operations. The source packs this by hand into
//! a 64-bit pointer's low bit and lands a raw `lock cmpxchgq`. This
//! rewrite gets the same single-word CAS from `crossbeam-epoch`'s
//! `Atomic<T>`, which already reserves a tag in an aligned pointer's low
//! bits for exactly this purpose. The teacher crate's own `SkipList`
//! already builds on `crossbeam::epoch::{Atomic, Owned, Shared}` for its
//! lock-free next-pointers, so this generalizes a pattern already present
//! in the workspace rather than introducing a new one.

use crossbeam::epoch::{Atomic, Guard, Owned, Shared};
use std::sync::atomic::Ordering;

/// An atomic `(reference, mark)` pair. `T` is the node type that owns this
/// field; the mark describes whether *the node holding this `MarkedRef`*
/// has been logically deleted.
pub(crate) struct MarkedRef<T> {
    inner: Atomic<T>,
}

impl<T> MarkedRef<T> {
    /// A `MarkedRef` pointing at nothing, unmarked.
    pub(crate) fn null() -> Self {
        Self {
            inner: Atomic::null(),
        }
    }

    /// Non-atomic write, valid only while the owning node is not yet
    /// reachable by any other thread (i.e. during construction).
    pub(crate) fn store_plain(&self, reference: Shared<'_, T>, mark: bool) {
        self.inner
            .store(reference.with_tag(mark as usize), Ordering::Relaxed);
    }

    /// Atomic read of the pair.
    pub(crate) fn load<'g>(&self, guard: &'g Guard) -> (Shared<'g, T>, bool) {
        let raw = self.inner.load(Ordering::Acquire, guard);
        (raw.with_tag(0), raw.tag() != 0)
    }

    /// Atomic read of just the reference component.
    pub(crate) fn reference<'g>(&self, guard: &'g Guard) -> Shared<'g, T> {
        self.load(guard).0
    }

    /// Atomic read of just the mark component.
    pub(crate) fn mark(&self, guard: &Guard) -> bool {
        self.load(guard).1
    }

    /// CAS of the whole `(reference, mark)` word against an already-shared
    /// (already reachable, or a sentinel) node. Used to mark a node
    /// deleted, or to physically unlink an already-linked successor.
    ///
    /// Release on success, acquire on failure, per the source's memory
    /// model (§5 of the spec this crate implements).
    pub(crate) fn compare_and_set<'g>(
        &self,
        expected_ref: Shared<'_, T>,
        expected_mark: bool,
        new_ref: Shared<'g, T>,
        new_mark: bool,
        guard: &'g Guard,
    ) -> bool {
        let expected = expected_ref.with_tag(expected_mark as usize);
        let new = new_ref.with_tag(new_mark as usize);
        self.inner
            .compare_exchange(expected, new, Ordering::Release, Ordering::Acquire, guard)
            .is_ok()
    }

    /// CAS that splices in a freshly allocated, not-yet-shared node. On
    /// failure the `Owned` is handed back so the caller can retry without
    /// reallocating or leaking it. `Atomic::compare_exchange` already
    /// returns ownership via `CompareExchangeError::new` for this reason.
    pub(crate) fn compare_and_set_owned<'g>(
        &self,
        expected_ref: Shared<'_, T>,
        expected_mark: bool,
        new_owned: Owned<T>,
        new_mark: bool,
        guard: &'g Guard,
    ) -> Result<Shared<'g, T>, Owned<T>> {
        let expected = expected_ref.with_tag(expected_mark as usize);
        let new = new_owned.with_tag(new_mark as usize);
        self.inner
            .compare_exchange(expected, new, Ordering::Release, Ordering::Acquire, guard)
            .map_err(|e| e.new)
    }
}
