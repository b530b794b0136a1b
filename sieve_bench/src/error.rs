use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("{}", crate::config::USAGE)]
    Usage,

    #[error("expected flag {expected}, found {found:?}")]
    UnexpectedFlag { expected: &'static str, found: String },

    #[error("{flag} needs a positive integer, got {value:?}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to install signal handler: {0}")]
    Signal(#[source] ctrlc::Error),

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("Interrupted")]
    Interrupted,
}

impl BenchError {
    /// Errors caused by a bad command line; the binary follows these with the usage line.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            BenchError::Usage | BenchError::UnexpectedFlag { .. } | BenchError::InvalidValue { .. }
        )
    }
}
