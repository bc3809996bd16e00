//! Core types shared between the concurrent set implementations and the
//! benchmark driver.

/// A key stored in the set: an unsigned 64-bit integer.
///
/// `0` is reserved as the lock-free list's head sentinel key and
/// `u64::MAX` as its tail sentinel key; callers never observe either as a
/// member of the abstract set.
pub type Key = u64;

/// Reserved tail sentinel key for the lock-free variant.
pub const TAIL_SENTINEL: Key = u64::MAX;

/// Top bit reserved to mark a lock-free bucket's head sentinel key.
pub const SENTINEL_BIT: Key = 1 << 63;

/// Selects which concurrent set backend a driver run or test exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Harris/Michael marked-pointer lock-free list, bucketed by hash.
    LockFree,
    /// Per-bucket mutex over a sorted singly-linked list.
    Locked,
}

/// The operation a workload entry asks the set to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Delete,
    Contains,
}
