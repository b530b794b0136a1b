use std::mem;

pub const NS_PER_SEC: u64 = 1_000_000_000;

pub fn now_ns() -> u64 {
    unsafe {
        let mut ts: libc::timespec = mem::zeroed();
        let rc = libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts);
        debug_assert_eq!(rc, 0, "clock_gettime(CLOCK_MONOTONIC) failed");
        (ts.tv_sec as u64) * NS_PER_SEC + ts.tv_nsec as u64
    }
}

/// Whole seconds since `start_ns`, truncated.
pub fn elapsed_secs(start_ns: u64) -> u64 {
    now_ns().saturating_sub(start_ns) / NS_PER_SEC
}
