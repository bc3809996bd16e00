//! Core types and error handling shared by `concur-map` and
//! `concur-map-bench`.
//!
//! - Common error types with [`Error`] and [`Result`]
//! - The [`Key`] alias and the [`Variant`]/[`Operation`] selectors
//!
//! # Example
//!
//! ```
//! use concur_map_core::{Key, Variant};
//!
//! let key: Key = 42;
//! let variant = Variant::LockFree;
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
