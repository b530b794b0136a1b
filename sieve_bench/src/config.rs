use crate::error::BenchError;

pub const USAGE: &str = "usage: bench --timeout <sec> --mp <n-cores>";

const TIMEOUT_FLAG: &str = "--timeout";
const WORKERS_FLAG: &str = "--mp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub timeout_secs: u64,
    pub workers: u32,
}

impl BenchConfig {
    /// Parses the full `std::env::args()` vector, program name included:
    /// `<prog> --timeout <sec> --mp <n>`, nothing more, nothing less.
    pub fn from_args(args: &[String]) -> Result<Self, BenchError> {
        if args.len() != 5 || is_help(&args[1]) {
            return Err(BenchError::Usage);
        }

        expect_flag(&args[1], TIMEOUT_FLAG)?;
        expect_flag(&args[3], WORKERS_FLAG)?;

        let timeout_secs = positive(TIMEOUT_FLAG, &args[2])?;
        let workers = positive(WORKERS_FLAG, &args[4])?;
        // The completion latch is a 32-bit futex word.
        let workers = u32::try_from(workers).map_err(|_| BenchError::InvalidValue {
            flag: WORKERS_FLAG,
            value: args[4].clone(),
        })?;

        Ok(Self {
            timeout_secs,
            workers,
        })
    }
}

fn is_help(arg: &str) -> bool {
    arg == "--help" || arg == "-h"
}

fn expect_flag(found: &str, expected: &'static str) -> Result<(), BenchError> {
    if found == expected {
        Ok(())
    } else {
        Err(BenchError::UnexpectedFlag {
            expected,
            found: found.to_string(),
        })
    }
}

fn positive(flag: &'static str, value: &str) -> Result<u64, BenchError> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BenchError::InvalidValue {
            flag,
            value: value.to_string(),
        }),
    }
}
