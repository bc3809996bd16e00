//! Command-line arguments for the benchmark driver.

use clap::{Parser, ValueEnum};
use concur_map_core::{Error, Result, Variant};

/// Runs a synthetic workload against a [`concur_map::ConcurrentSet`] and
/// reports elapsed wall time.
#[derive(Parser, Debug)]
#[command(name = "concur-map-bench", about)]
pub struct Args {
    /// Number of operations to execute.
    pub num_items: u64,

    /// Number of worker threads.
    pub num_threads: u64,

    /// Keys are drawn uniformly from `[10, 10 + key_range)`.
    pub key_range: u64,

    /// Percentage (0-100) of operations that are Insert.
    pub pct_insert: u64,

    /// Percentage (0-100) of operations that are Delete. The remainder
    /// after `pct_insert + pct_delete` is Contains.
    pub pct_delete: u64,

    /// Which backend to run against.
    #[arg(long, value_enum, default_value_t = VariantArg::LockFree)]
    pub variant: VariantArg,

    /// Number of buckets in the table.
    #[arg(long, default_value_t = 10_000)]
    pub buckets: usize,
}

/// Clap-friendly mirror of [`Variant`]; `concur-map-core` has no reason to
/// depend on `clap` itself.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantArg {
    LockFree,
    Locked,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::LockFree => Variant::LockFree,
            VariantArg::Locked => Variant::Locked,
        }
    }
}

impl Args {
    /// Checks the constraints the positional contract imposes beyond what
    /// `clap`'s type-level parsing already guarantees.
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 {
            return Err(Error::InvalidArgument(
                "num_threads must be at least 1".into(),
            ));
        }
        if self.key_range == 0 {
            return Err(Error::InvalidArgument("key_range must be at least 1".into()));
        }
        if self.pct_insert > 100 || self.pct_delete > 100 {
            return Err(Error::InvalidArgument(
                "pct_insert and pct_delete must each be at most 100".into(),
            ));
        }
        if self.pct_insert + self.pct_delete > 100 {
            return Err(Error::InvalidArgument(
                "pct_insert + pct_delete must not exceed 100".into(),
            ));
        }
        if self.buckets == 0 {
            return Err(Error::InvalidArgument("buckets must be at least 1".into()));
        }
        Ok(())
    }
}
