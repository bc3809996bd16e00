//! Configuration for the concurrent set tables

/// Configuration options for a [`crate::ConcurrentSet`]
///
/// # Example
///
/// ```
/// use concur_map::TableConfig;
///
/// let config = TableConfig {
///     bucket_count: 1024,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Number of buckets in the table. Hashing is `key % bucket_count`.
    pub bucket_count: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            // Matches the source's `NUM_BUCKETS`.
            bucket_count: 10_000,
        }
    }
}
