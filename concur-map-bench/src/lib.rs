//! Benchmark driver for `concur-map`: argument parsing, deterministic
//! workload generation, thread fan-out, and timing.
//!
//! Split into a library so the argument-parsing and run logic can be
//! exercised directly by tests, leaving the `main` binary as a thin
//! wrapper that wires `std::process::exit` codes around them.

pub mod args;
pub mod run;
pub mod workload;

pub use args::{Args, VariantArg};
pub use run::{run, RunResult};
pub use workload::{generate, WorkloadItem};
