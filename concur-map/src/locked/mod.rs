//! Lock-based concurrent set: per-bucket `parking_lot::Mutex` over a
//! sorted singly-linked list.
//!
//! - [`list`]: the sorted list under one exclusive lock
//! - [`table`]: bucket dispatch by `key % bucket_count`

mod list;
mod table;

pub use list::LockedList;
pub use table::LockedTable;
