// Sieve of Eratosthenes over [0, SIEVE_SIZE). Pure CPU burn: callers drop the result.

pub const SIEVE_SIZE: usize = 1_000_000;
pub const SQRT_LIMIT: usize = 1_000; // sqrt of SIEVE_SIZE

pub fn sieve_of_eratosthenes() -> Vec<bool> {
    let mut sieve = vec![true; SIEVE_SIZE];
    sieve[0] = false;
    sieve[1] = false;

    for i in 2..SQRT_LIMIT {
        if sieve[i] {
            let mut j = i * i;
            while j < SIEVE_SIZE {
                sieve[j] = false;
                j += i;
            }
        }
    }
    sieve
}
