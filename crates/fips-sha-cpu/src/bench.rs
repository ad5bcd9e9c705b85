//! CPU throughput benchmark.
//!
//! Hashes a fixed buffer of one repeated byte over and over and reports
//! MB/sec (1 MB = 1024 * 1024 bytes) for the one-shot engine, the incremental
//! context and a rayon batch. With the `reference` feature the sha2 crate is
//! timed on the same buffer for comparison.

use fips_sha_core::Digest;
use fips_sha_crypto::{hash, Sha256Context};
use rayon::prelude::*;
use std::hint::black_box;
use std::time::Instant;
use thiserror::Error;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Feed size used by the streaming component.
const STREAM_FEED: usize = 64;

/// Number of timed components per run.
pub const COMPONENTS: u32 = if cfg!(feature = "reference") { 4 } else { 3 };

/// Benchmark errors.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("iteration count must be at least 1")]
    NoIterations,
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("{component} produced {got}, expected {expected}")]
    Mismatch {
        component: &'static str,
        expected: Digest,
        got: Digest,
    },
}

/// Benchmark configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Length of the hashed buffer in bytes.
    pub message_len: usize,
    /// Byte the buffer is filled with.
    pub fill: u8,
    /// Number of timed iterations per component.
    pub iters: u32,
    /// Number of warmup iterations before timing.
    pub warmup: u32,
    /// Worker threads for the batch component (0 = rayon default).
    pub threads: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            message_len: 1000,
            fill: b'a',
            iters: 100_000,
            warmup: 1_000,
            threads: 0,
        }
    }
}

/// Timing for one component.
#[derive(Debug, Clone, Default)]
pub struct ComponentStats {
    /// Total time in nanoseconds across all iterations.
    pub total_ns: u64,
    /// Total bytes hashed across all iterations.
    pub bytes: u64,
    /// Number of iterations.
    pub count: u32,
}

impl ComponentStats {
    pub fn seconds(&self) -> f64 {
        self.total_ns as f64 / 1e9
    }

    pub fn mb_per_sec(&self) -> f64 {
        let secs = self.seconds();
        if secs > 0.0 {
            self.bytes as f64 / BYTES_PER_MB / secs
        } else {
            0.0
        }
    }
}

/// Results of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchStats {
    pub one_shot: ComponentStats,
    pub streaming: ComponentStats,
    pub batch: ComponentStats,
    /// sha2 crate on the same buffer, when built with `reference`.
    pub reference: Option<ComponentStats>,
    /// Threads actually used by the batch component.
    pub threads: usize,
    /// Digest of the benchmark buffer.
    pub digest: Digest,
}

/// Run the benchmark.
pub fn run_bench(cfg: &BenchConfig) -> Result<BenchStats, BenchError> {
    run_bench_with_progress(cfg, |_| {})
}

/// Run the benchmark, calling `on_iteration` with the component name after
/// every timed iteration.
pub fn run_bench_with_progress<F>(
    cfg: &BenchConfig,
    mut on_iteration: F,
) -> Result<BenchStats, BenchError>
where
    F: FnMut(&'static str) + Send,
{
    if cfg.iters == 0 {
        return Err(BenchError::NoIterations);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.threads)
        .build()?;
    let threads = pool.current_num_threads();

    let message = vec![cfg.fill; cfg.message_len];
    let batch: Vec<&[u8]> = vec![message.as_slice(); threads];

    let span = tracing::info_span!(
        "bench",
        message_len = cfg.message_len,
        iters = cfg.iters,
        threads
    );
    let _enter = span.enter();

    // Every component must agree before anything is timed
    let digest = hash(&message);
    let streamed = stream_hash(&message);
    if streamed != digest {
        return Err(BenchError::Mismatch {
            component: "streaming",
            expected: digest,
            got: streamed,
        });
    }
    let batched = pool.install(|| batch_hash(&batch));
    if let Some(bad) = batched.into_iter().find(|d| *d != digest) {
        return Err(BenchError::Mismatch {
            component: "batch",
            expected: digest,
            got: bad,
        });
    }

    let reference = time_reference(cfg, &message, digest, &mut on_iteration)?;

    let one_shot = time_component(
        cfg,
        message.len() as u64,
        || {
            black_box(hash(black_box(&message)));
        },
        || on_iteration("one-shot"),
    );
    tracing::debug!(mb_s = one_shot.mb_per_sec(), "one-shot done");

    let streaming = time_component(
        cfg,
        message.len() as u64,
        || {
            black_box(stream_hash(black_box(&message)));
        },
        || on_iteration("streaming"),
    );
    tracing::debug!(mb_s = streaming.mb_per_sec(), "streaming done");

    let batch_bytes = (message.len() * threads) as u64;
    let batch_stats = pool.install(|| {
        time_component(
            cfg,
            batch_bytes,
            || {
                black_box(batch_hash(black_box(&batch)));
            },
            || on_iteration("batch"),
        )
    });
    tracing::debug!(mb_s = batch_stats.mb_per_sec(), "batch done");

    Ok(BenchStats {
        one_shot,
        streaming,
        batch: batch_stats,
        reference,
        threads,
        digest,
    })
}

fn stream_hash(message: &[u8]) -> Digest {
    let mut ctx = Sha256Context::new();
    for chunk in message.chunks(STREAM_FEED) {
        ctx.update(chunk);
    }
    ctx.finalize()
}

fn batch_hash(batch: &[&[u8]]) -> Vec<Digest> {
    batch.par_iter().map(|m| hash(m)).collect()
}

#[cfg(feature = "reference")]
fn reference_hash(message: &[u8]) -> Digest {
    use sha2::Digest as _;
    Digest::new(sha2::Sha256::digest(message).into())
}

#[cfg(feature = "reference")]
fn time_reference<F>(
    cfg: &BenchConfig,
    message: &[u8],
    expected: Digest,
    on_iteration: &mut F,
) -> Result<Option<ComponentStats>, BenchError>
where
    F: FnMut(&'static str),
{
    let got = reference_hash(message);
    if got != expected {
        return Err(BenchError::Mismatch {
            component: "reference",
            expected,
            got,
        });
    }

    let stats = time_component(
        cfg,
        message.len() as u64,
        || {
            black_box(reference_hash(black_box(message)));
        },
        || on_iteration("reference"),
    );
    tracing::debug!(mb_s = stats.mb_per_sec(), "reference done");
    Ok(Some(stats))
}

#[cfg(not(feature = "reference"))]
fn time_reference<F>(
    _cfg: &BenchConfig,
    _message: &[u8],
    _expected: Digest,
    _on_iteration: &mut F,
) -> Result<Option<ComponentStats>, BenchError>
where
    F: FnMut(&'static str),
{
    Ok(None)
}

/// Warmup then timed iterations for a single component.
fn time_component<W, P>(
    cfg: &BenchConfig,
    bytes_per_iter: u64,
    mut work: W,
    mut progress: P,
) -> ComponentStats
where
    W: FnMut(),
    P: FnMut(),
{
    for _ in 0..cfg.warmup {
        work();
    }

    let mut total_ns = 0u64;
    for _ in 0..cfg.iters {
        let start = Instant::now();
        work();
        total_ns += start.elapsed().as_nanos() as u64;
        progress();
    }

    ComponentStats {
        total_ns,
        bytes: bytes_per_iter * cfg.iters as u64,
        count: cfg.iters,
    }
}

/// Print benchmark results.
pub fn print_bench_results(stats: &BenchStats, cfg: &BenchConfig) {
    println!(
        "\nSHA-256 CPU bench, message={} x {:?}, iters={}, warmup={}, threads={}\n",
        cfg.message_len, cfg.fill as char, cfg.iters, cfg.warmup, stats.threads
    );

    let mut components: Vec<(&str, &ComponentStats)> = vec![
        ("one-shot", &stats.one_shot),
        ("streaming", &stats.streaming),
        ("batch", &stats.batch),
    ];
    if let Some(reference) = &stats.reference {
        components.push(("sha2", reference));
    }

    for (name, cs) in components {
        let avg_us = cs.total_ns as f64 / cs.count.max(1) as f64 / 1_000.0;
        println!(
            "{:<12} {:>9.3} s  avg {:>9.3} us  {:>10.2} MB/sec",
            format!("{}:", name),
            cs.seconds(),
            avg_us,
            cs.mb_per_sec()
        );
    }

    println!("{:<12} {}", "digest:", stats.digest);
}
