//! Deterministic workload generation: a seeded pseudo-random sequence of
//! keys, tagged with operations by position.

use concur_map_core::{Key, Operation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One operation to apply against the set: a key and which of
/// Insert/Delete/Contains to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadItem {
    pub key: Key,
    pub operation: Operation,
}

/// Generates `num_items` workload entries.
///
/// Always seeded with `0`, so two runs with identical `num_items` and
/// `key_range` draw the identical key sequence. The first
/// `floor(num_items * pct_insert / 100)` entries are tagged Insert, the
/// next `floor(num_items * pct_delete / 100)` Delete, and the remainder
/// Contains. Operation assignment is positional, independent of the key
/// draw.
pub fn generate(num_items: u64, key_range: u64, pct_insert: u64, pct_delete: u64) -> Vec<WorkloadItem> {
    let mut rng = StdRng::seed_from_u64(0);
    let insert_count = num_items * pct_insert / 100;
    let delete_count = num_items * pct_delete / 100;

    (0..num_items)
        .map(|i| {
            let key = 10 + rng.gen_range(0..key_range);
            let operation = if i < insert_count {
                Operation::Insert
            } else if i < insert_count + delete_count {
                Operation::Delete
            } else {
                Operation::Contains
            };
            WorkloadItem { key, operation }
        })
        .collect()
}
