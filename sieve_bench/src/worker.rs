use std::hint::black_box;

use tracing::debug;

use crate::clock::{elapsed_secs, now_ns};
use crate::sieve::sieve_of_eratosthenes;
use crate::Shared;

/// Runs sieves until `timeout_secs` whole seconds have passed since entry, or
/// `shared.stop` is raised. The check follows each sieve, so at least one
/// completes. Counts down `shared.done` exactly once on the way out.
/// Returns this worker's own tally.
pub fn run(id: usize, timeout_secs: u64, shared: &Shared) -> u64 {
    let start = now_ns();
    let mut local: u64 = 0;
    debug!(worker = id, timeout_secs, "worker started");

    loop {
        black_box(sieve_of_eratosthenes());
        shared.record_op();
        local += 1;

        if elapsed_secs(start) >= timeout_secs || shared.should_stop() {
            break;
        }
    }

    debug!(worker = id, ops = local, "worker finished");
    shared.done.count_down();
    local
}
