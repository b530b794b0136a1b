// sieve_bench/src/lib.rs
// Shared state + the pieces the `bench` binary wires together.

pub mod clock;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod latch;
pub mod signal;
pub mod sieve;
pub mod worker;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub use config::{BenchConfig, USAGE};
pub use error::BenchError;
pub use latch::Latch;

/// State every worker and the coordinator see.
pub struct Shared {
    pub ops: AtomicU64, // completed sieves, all workers
    pub done: Latch,    // one count_down per finished worker
    pub stop: AtomicBool,
}

impl Shared {
    pub fn new(workers: u32) -> Self {
        Self {
            ops: AtomicU64::new(0),
            done: Latch::new(workers),
            stop: AtomicBool::new(false),
        }
    }

    // Only the final sum matters, so no ordering across workers.
    #[inline]
    pub fn record_op(&self) {
        self.ops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ops(&self) -> u64 {
        self.ops.load(Ordering::Relaxed)
    }

    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
