//! The timed execution loop.
//!
//! One call measures one batch: the operation runs exactly `n` times
//! back-to-back against its bound store, with wall-clock time and an
//! allocation-count delta taken around the whole batch. The loop itself
//! neither caches nor amortizes anything; if a store variant caches, that
//! is the strategy under test, not the loop.
//!
//! Allocation counting is a host capability injected as a plain function;
//! [`zero_counter`] is the degraded fallback for hosts (or callers) without
//! one, and its use is never an error.

use std::time::{Duration, Instant};

/// A function reporting a monotonically increasing allocation-event count.
pub type AllocCounter = fn() -> u64;

/// Fallback counter for hosts without allocation instrumentation.
pub fn zero_counter() -> u64 {
    0
}

/// One measurement: a labeled batch's elapsed time and allocation delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// The workload entry's label.
    pub label: &'static str,
    /// Wall-clock time for the whole batch.
    pub elapsed: Duration,
    /// Allocation events during the batch (zero when uninstrumented).
    pub allocations: u64,
}

/// Invokes `op` exactly `n` times, timing the whole batch.
///
/// An `Err` from any repetition aborts the batch immediately and propagates;
/// no partial measurement is produced.
pub fn run_timed<E>(
    label: &'static str,
    n: usize,
    alloc_count: AllocCounter,
    mut op: impl FnMut() -> Result<(), E>,
) -> Result<Measurement, E> {
    let allocs_before = alloc_count();
    let start = Instant::now();
    for _ in 0..n {
        op()?;
    }
    let elapsed = start.elapsed();
    let allocations = alloc_count().saturating_sub(allocs_before);

    Ok(Measurement {
        label,
        elapsed,
        allocations,
    })
}
