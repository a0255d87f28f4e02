//! Prime search for the share modulus.

/// Returns true if `n` is prime.
///
/// Uses 6k ± 1 trial division up to `⌊√n⌋`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    if n % 3 == 0 {
        return n == 3;
    }

    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Floating-point form of [`is_prime`].
///
/// NaN, infinities, fractional values and anything below 2 are not prime.
pub fn is_prime_f64(n: f64) -> bool {
    if !n.is_finite() || n.fract() != 0.0 || n < 2.0 || n > u64::MAX as f64 {
        return false;
    }
    is_prime(n as u64)
}

/// Returns the smallest prime `>= n`.
pub fn next_prime(n: u64) -> u64 {
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Modulus used for share bytes with `t`-bit symbols.
///
/// This is the smallest prime that is at least `2^t + 1`, so every symbol is
/// at most `prime - 2` and a single-symbol share never reaches 255. For
/// `t >= 2` it equals `next_prime(2^t)`; for `t = 1` it is 3 rather than 2.
pub fn share_modulus(t: u8) -> u64 {
    next_prime((1u64 << t) + 1)
}
