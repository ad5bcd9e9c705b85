//! Multi-threaded hashing of independent messages.
//!
//! Each message gets its own engine; the only shared data is the read-only
//! round-constant table, so rayon can fan the work out with no coordination.

#![forbid(unsafe_code)]

use fips_sha_core::Digest;
use fips_sha_crypto::{hash, Sha256Context};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Hash every message on the rayon pool. Output order matches input order.
pub fn hash_batch<M>(messages: &[M]) -> Vec<Digest>
where
    M: AsRef<[u8]> + Sync,
{
    let span = tracing::debug_span!("hash_batch", messages = messages.len());
    let _enter = span.enter();

    messages.par_iter().map(|m| hash(m.as_ref())).collect()
}

/// Hash `data` in `chunk_size` pieces, checking `stop` between chunks.
///
/// Returns `None` if `stop` was observed before the digest was finished.
/// A `chunk_size` of zero is treated as one.
pub fn hash_chunked(data: &[u8], chunk_size: usize, stop: &AtomicBool) -> Option<Digest> {
    let chunk_size = chunk_size.max(1);
    let mut ctx = Sha256Context::new();

    for chunk in data.chunks(chunk_size) {
        if stop.load(Ordering::Relaxed) {
            tracing::debug!(
                processed = ctx.bytes_processed(),
                total = data.len(),
                "chunked hash cancelled"
            );
            return None;
        }
        ctx.update(chunk);
    }

    if stop.load(Ordering::Relaxed) {
        return None;
    }
    Some(ctx.finalize())
}

/// Hash many messages, each cancellable. Cancelled entries are `None`.
pub fn hash_batch_cancellable<M>(
    messages: &[M],
    chunk_size: usize,
    stop: &AtomicBool,
) -> Vec<Option<Digest>>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|m| hash_chunked(m.as_ref(), chunk_size, stop))
        .collect()
}
