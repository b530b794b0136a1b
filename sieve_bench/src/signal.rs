// SIGINT/SIGTERM -> INTERRUPTED. The handler only stores an atomic.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::BenchError;

pub static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the process-wide handler. `ctrlc` allows one per process, so a
/// second call fails with `BenchError::Signal`.
pub fn install() -> Result<(), BenchError> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst)).map_err(BenchError::Signal)
}
