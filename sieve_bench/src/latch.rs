// One-shot countdown latch on a futex word.
//
// count_down: decrement; the decrement that reaches 0 wakes every waiter.
// wait:       sleep while count != 0, in bounded naps so an interrupt flag
//             raised from a signal handler is noticed.

use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use crate::error::BenchError;

const NAP: Duration = Duration::from_millis(100);

unsafe fn futex_wait(addr: *const AtomicU32, expected: u32, timeout: Duration) -> i32 {
    let mut ts: libc::timespec = std::mem::zeroed();
    ts.tv_sec = timeout.as_secs() as libc::time_t;
    ts.tv_nsec = timeout.subsec_nanos() as libc::c_long;
    libc::syscall(
        libc::SYS_futex,
        addr,
        libc::FUTEX_WAIT | libc::FUTEX_PRIVATE_FLAG,
        expected,
        &ts as *const libc::timespec,
        ptr::null::<u32>(),
        0,
    ) as i32
}

unsafe fn futex_wake_all(addr: *const AtomicU32) -> i32 {
    libc::syscall(
        libc::SYS_futex,
        addr,
        libc::FUTEX_WAKE | libc::FUTEX_PRIVATE_FLAG,
        i32::MAX,
        ptr::null::<libc::timespec>(),
        ptr::null::<u32>(),
        0,
    ) as i32
}

pub struct Latch {
    count: AtomicU32,
}

impl Latch {
    pub fn new(count: u32) -> Self {
        Self {
            count: AtomicU32::new(count),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    /// Each participant calls this exactly once. Extra calls past zero are ignored.
    pub fn count_down(&self) {
        let prev = self
            .count
            .fetch_update(Ordering::Release, Ordering::Relaxed, |c| c.checked_sub(1));
        if prev == Ok(1) {
            unsafe {
                futex_wake_all(&self.count as *const AtomicU32);
            }
        }
    }

    /// Blocks until the count reaches zero, or fails with `Interrupted` once
    /// `interrupt` is set.
    pub fn wait(&self, interrupt: &AtomicBool) -> Result<(), BenchError> {
        loop {
            let c = self.count.load(Ordering::Acquire);
            if c == 0 {
                return Ok(());
            }
            if interrupt.load(Ordering::SeqCst) {
                return Err(BenchError::Interrupted);
            }
            // Returns on wake, value change (EAGAIN), timeout, or EINTR. All re-check above.
            unsafe {
                futex_wait(&self.count as *const AtomicU32, c, NAP);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn zero_count_does_not_block() {
        let latch = Latch::new(0);
        let never = AtomicBool::new(false);
        assert!(latch.wait(&never).is_ok());
    }

    #[test]
    fn releases_after_all_count_down() {
        let latch = Arc::new(Latch::new(4));
        let never = AtomicBool::new(false);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let latch = Arc::clone(&latch);
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(20 * i));
                    latch.count_down();
                })
            })
            .collect();

        latch.wait(&never).unwrap();
        assert_eq!(latch.remaining(), 0);
        for h in handles {
            h.join().unwrap();
        }
    }

    #[test]
    fn extra_count_down_saturates() {
        let latch = Latch::new(1);
        latch.count_down();
        latch.count_down();
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    fn interrupt_aborts_wait() {
        let latch = Latch::new(1);
        let interrupt = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&interrupt);
        let raiser = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
        });

        let start = Instant::now();
        let err = latch.wait(&interrupt).unwrap_err();
        assert!(matches!(err, BenchError::Interrupted));
        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(latch.remaining(), 1);
        raiser.join().unwrap();
    }
}
