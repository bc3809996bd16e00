//! Lock-free concurrent set: Harris/Michael marked-pointer singly-linked
//! list under a fixed-width bucket array.
//!
//! - [`marked_ref`]: the atomic `(reference, mark)` CAS primitive
//! - [`list`]: the sorted list with logical-delete-then-physical-unlink
//! - [`table`]: bucket dispatch by `key % bucket_count`

mod list;
mod marked_ref;
mod table;

pub use list::LockFreeList;
pub use table::LockFreeTable;
