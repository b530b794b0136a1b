use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::{worker, Shared};

/// Spawns `config.workers` sieve workers, waits for all of them and returns
/// the total number of sieves completed.
///
/// If `interrupt` is raised during the wait, workers are told to stop at
/// their next loop boundary and `Interrupted` is returned without joining them.
pub fn run(config: &BenchConfig, interrupt: &AtomicBool) -> Result<u64, BenchError> {
    let shared = Arc::new(Shared::new(config.workers));
    info!(
        workers = config.workers,
        timeout_secs = config.timeout_secs,
        "starting benchmark"
    );

    let mut handles: Vec<JoinHandle<u64>> = Vec::new();
    for id in 0..config.workers as usize {
        let shared_ref = Arc::clone(&shared);
        let timeout_secs = config.timeout_secs;
        let handle = thread::Builder::new()
            .name(format!("sieve-{id}"))
            .spawn(move || worker::run(id, timeout_secs, &shared_ref));

        match handle {
            Ok(h) => handles.push(h),
            Err(source) => {
                // Workers already running would otherwise hold the latch open.
                shared.stop.store(true, Ordering::Relaxed);
                return Err(BenchError::Spawn { worker: id, source });
            }
        }
    }

    if let Err(e) = shared.done.wait(interrupt) {
        warn!(ops = shared.ops(), "interrupted while waiting for workers");
        shared.stop.store(true, Ordering::Relaxed);
        return Err(e);
    }

    for (id, handle) in handles.into_iter().enumerate() {
        handle.join().map_err(|_| BenchError::WorkerPanicked(id))?;
    }

    let total = shared.ops();
    info!(ops = total, "benchmark finished");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn every_worker_contributes() {
        let config = BenchConfig {
            timeout_secs: 1,
            workers: 4,
        };
        let never = AtomicBool::new(false);

        let ops = run(&config, &never).unwrap();
        assert!(ops >= 4, "ops = {ops}");
    }

    #[test]
    fn single_worker_overruns_by_at_most_one_sieve() {
        let config = BenchConfig {
            timeout_secs: 1,
            workers: 1,
        };
        let never = AtomicBool::new(false);

        let start = Instant::now();
        let ops = run(&config, &never).unwrap();
        let took = start.elapsed();

        assert!(ops >= 1);
        assert!(took >= Duration::from_secs(1));
        assert!(took < Duration::from_secs(3), "took {took:?}");
    }

    #[test]
    fn raised_interrupt_returns_early() {
        let config = BenchConfig {
            timeout_secs: 30,
            workers: 2,
        };
        let interrupt = AtomicBool::new(true);

        let start = Instant::now();
        let err = run(&config, &interrupt).unwrap_err();
        assert!(matches!(err, BenchError::Interrupted));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
