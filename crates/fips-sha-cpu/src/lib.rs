//! CPU-side drivers for the SHA-256 engine: parallel batches and benchmarks.

#![forbid(unsafe_code)]

pub mod bench;
pub mod parallel;

pub use bench::{run_bench, BenchConfig, BenchError, BenchStats};
pub use parallel::{hash_batch, hash_batch_cancellable, hash_chunked};
