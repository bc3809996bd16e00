//! Concurrent sets of `u64` keys.
//!
//! Two interchangeable backends, selected at construction time via
//! [`concur_map_core::Variant`]:
//!
//! - **lock-free** ([`lockfree`]): Harris/Michael marked-pointer sorted
//!   linked list under a fixed-width bucket array, reclaimed with
//!   epoch-based garbage collection.
//! - **lock-based** ([`locked`]): per-bucket `parking_lot::Mutex` over a
//!   sorted singly-linked list.
//!
//! Both backends are exposed through one facade, [`ConcurrentSet`], so
//! callers can swap the concurrency strategy without touching call
//! sites.
//!
//! # Example
//!
//! ```
//! use concur_map::{ConcurrentSet, TableConfig};
//! use concur_map_core::Variant;
//!
//! let set = ConcurrentSet::new(Variant::LockFree, TableConfig::default());
//! assert!(set.insert(42));
//! assert!(set.contains(42));
//! assert!(!set.insert(42));
//! assert!(set.delete(42));
//! assert!(!set.contains(42));
//! ```

pub mod config;
pub mod lockfree;
pub mod locked;
mod set;

pub use config::TableConfig;
pub use set::ConcurrentSet;
