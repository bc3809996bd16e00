//! Fixed-pool thread fan-out that applies a generated workload to a
//! [`ConcurrentSet`] and times the run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use concur_map::{ConcurrentSet, TableConfig};
use concur_map_core::{Operation, Variant};
use log::debug;

use crate::workload::WorkloadItem;

/// Outcome of one driver run: elapsed wall time, the set left behind,
/// and how many Insert/Delete calls actually changed the set, so
/// callers (tests, mainly) can check the accounting identity
/// (successful inserts minus successful deletes equals final size)
/// without relying on the real-time order operations landed in.
pub struct RunResult {
    pub elapsed: Duration,
    pub set: ConcurrentSet,
    pub successful_inserts: u64,
    pub successful_deletes: u64,
}

/// Applies `workload` to a freshly constructed set of the given `variant`
/// and `bucket_count`, fanned out over `num_threads` workers.
///
/// Thread `t` applies the entries at indices `i` with
/// `i % num_threads == t`, matching the source's fixed partitioning
/// scheme rather than a work-stealing queue.
pub fn run(
    variant: Variant,
    bucket_count: usize,
    num_threads: u64,
    workload: &[WorkloadItem],
) -> RunResult {
    let set = ConcurrentSet::new(variant, TableConfig { bucket_count });
    let num_threads = num_threads.max(1);
    let successful_inserts = AtomicU64::new(0);
    let successful_deletes = AtomicU64::new(0);

    let start = Instant::now();
    std::thread::scope(|scope| {
        for t in 0..num_threads {
            let set = &set;
            let successful_inserts = &successful_inserts;
            let successful_deletes = &successful_deletes;
            scope.spawn(move || {
                for (i, item) in workload.iter().enumerate() {
                    if i as u64 % num_threads != t {
                        continue;
                    }
                    let changed = match item.operation {
                        Operation::Insert => set.insert(item.key),
                        Operation::Delete => set.delete(item.key),
                        Operation::Contains => set.contains(item.key),
                    };
                    if changed {
                        match item.operation {
                            Operation::Insert => {
                                successful_inserts.fetch_add(1, Ordering::Relaxed);
                            }
                            Operation::Delete => {
                                successful_deletes.fetch_add(1, Ordering::Relaxed);
                            }
                            Operation::Contains => {}
                        }
                    }
                    debug!(
                        "thread {t}: {:?}({}) -> {changed}",
                        item.operation, item.key
                    );
                }
            });
        }
    });
    let elapsed = start.elapsed();

    RunResult {
        elapsed,
        set,
        successful_inserts: successful_inserts.load(Ordering::Relaxed),
        successful_deletes: successful_deletes.load(Ordering::Relaxed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload;

    #[test]
    fn single_threaded_insert_only_run_matches_the_seeded_sequence() {
        let items = workload::generate(1000, 50, 100, 0);
        let expected: std::collections::HashSet<_> =
            items.iter().map(|i| i.key).collect();

        let result = run(Variant::LockFree, 16, 1, &items);
        assert_eq!(result.set.snapshot(), expected);
    }

    #[test]
    fn concurrency_does_not_change_an_insert_only_outcome() {
        let items = workload::generate(1000, 50, 100, 0);

        let single = run(Variant::LockFree, 16, 1, &items);
        let multi = run(Variant::LockFree, 16, 4, &items);
        assert_eq!(single.set.snapshot(), multi.set.snapshot());
    }

    #[test]
    fn both_variants_agree_on_an_insert_only_run() {
        let items = workload::generate(1000, 50, 100, 0);

        let lock_free = run(Variant::LockFree, 16, 1, &items);
        let locked = run(Variant::Locked, 16, 1, &items);
        assert_eq!(lock_free.set.snapshot(), locked.set.snapshot());
    }

    #[test]
    fn empty_workload_leaves_an_empty_set() {
        let items = workload::generate(0, 100, 100, 0);
        let result = run(Variant::LockFree, 16, 1, &items);
        assert!(result.set.snapshot().is_empty());
    }

    #[test]
    fn mixed_workload_final_set_is_within_the_key_range_and_sorted_invariants_hold() {
        let items = workload::generate(10_000, 100, 50, 50);
        let result = run(Variant::LockFree, 64, 8, &items);
        for key in result.set.snapshot() {
            assert!(key >= 10 && key < 110);
        }
    }
}
