//! C ABI for the prime marker, as declared in `include/calculate_primes.h`.
//!
//! The shared object is configured from the environment on first use (see
//! [`primemark_sieve::SieveOpts::from_env`]) and logs through [`primemark_sieve::setup_logger`].

use std::sync::OnceLock;

use libc::c_int;
use primemark_sieve::{setup_logger, Sieve, SieveError};

/// Returned by [calculate_primes_checked] on success.
pub const CALCULATE_PRIMES_OK: c_int = 0;

/// Returned by [calculate_primes_checked] on an invalid argument.
pub const CALCULATE_PRIMES_EINVAL: c_int = -1;

static SIEVE: OnceLock<Sieve> = OnceLock::new();

fn configured_sieve() -> &'static Sieve {
    SIEVE.get_or_init(|| {
        setup_logger();
        sieve_from_env()
    })
}

/// Reads the sieve configuration, falling back to the defaults on a malformed environment.
fn sieve_from_env() -> Sieve {
    Sieve::from_env().unwrap_or_else(|err| {
        tracing::warn!("ignoring sieve environment: {err}");
        Sieve::default()
    })
}

/// Sets `primes[i]` to `1` if `i` is prime and to `0` otherwise, for every `i` in `0..n`.
///
/// An invalid argument is logged and leaves the array untouched.
///
/// # Safety
///
/// `primes` must be null or point to at least `n` writable, aligned `int`s that no other code
/// accesses for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn calculate_primes(primes: *mut c_int, n: c_int) {
    calculate_primes_checked(primes, n);
}

/// Same as [calculate_primes], returning [CALCULATE_PRIMES_OK] or [CALCULATE_PRIMES_EINVAL].
///
/// # Safety
///
/// See [calculate_primes].
#[no_mangle]
pub unsafe extern "C" fn calculate_primes_checked(primes: *mut c_int, n: c_int) -> c_int {
    match mark(configured_sieve(), primes, n) {
        Ok(()) => CALCULATE_PRIMES_OK,
        Err(err) => {
            tracing::error!("calculate_primes: {err}");
            CALCULATE_PRIMES_EINVAL
        }
    }
}

unsafe fn mark(sieve: &Sieve, primes: *mut c_int, n: c_int) -> Result<(), SieveError> {
    let n = i64::from(n);
    // A null array has no slots, so anything but `n == 0` is rejected as undersized.
    if primes.is_null() {
        return sieve.mark::<c_int>(&mut [], n);
    }
    let len = sieve.validate(usize::MAX, n)?;
    // SAFETY: the caller guarantees `primes` points to at least `n` writable ints.
    let slots = unsafe { std::slice::from_raw_parts_mut(primes, len) };
    sieve.mark(slots, n)
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use primemark_sieve::SieveOpts;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_calculate_primes() {
        let mut primes: Vec<c_int> = vec![7; 10];
        unsafe { calculate_primes(primes.as_mut_ptr(), 10) };
        assert_eq!(primes, vec![0, 0, 1, 1, 0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_caller_owned_tail_is_untouched() {
        // The original caller allocated `m + 1` slots and passed `m`.
        let m = 20;
        let mut primes: Vec<c_int> = vec![0; m + 1];
        let status = unsafe { calculate_primes_checked(primes.as_mut_ptr(), m as c_int) };
        assert_eq!(status, CALCULATE_PRIMES_OK);
        let marked = (0..=m).filter(|&i| primes[i] == 1).collect::<Vec<_>>();
        assert_eq!(marked, vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(primes[m], 0);
    }

    #[rstest]
    #[case::negative(-5)]
    #[case::int_min(c_int::MIN)]
    fn test_negative_length(#[case] n: c_int) {
        let mut primes: Vec<c_int> = vec![3; 4];
        let status = unsafe { calculate_primes_checked(primes.as_mut_ptr(), n) };
        assert_eq!(status, CALCULATE_PRIMES_EINVAL);
        assert_eq!(primes, vec![3; 4]);

        unsafe { calculate_primes(primes.as_mut_ptr(), n) };
        assert_eq!(primes, vec![3; 4]);
    }

    #[test]
    fn test_null_array() {
        assert_eq!(unsafe { calculate_primes_checked(ptr::null_mut(), 0) }, CALCULATE_PRIMES_OK);
        assert_eq!(unsafe { calculate_primes_checked(ptr::null_mut(), 3) }, CALCULATE_PRIMES_EINVAL);
        unsafe { calculate_primes(ptr::null_mut(), 3) };
    }

    #[test]
    fn test_max_len_is_enforced() {
        let sieve = Sieve::new(SieveOpts::default().with_max_len(4));
        let mut primes: Vec<c_int> = vec![9; 8];
        let err = unsafe { mark(&sieve, primes.as_mut_ptr(), 8) }.unwrap_err();
        assert_eq!(err, SieveError::LengthTooLarge { requested: 8, max_len: 4 });
        assert_eq!(primes, vec![9; 8]);
    }

    #[test]
    fn test_malformed_environment_falls_back_to_defaults() {
        // Only malformed values are set here, so a concurrent first call to `configured_sieve`
        // also ends up with the defaults.
        std::env::set_var(primemark_sieve::utils::env::SIEVE_MAX_LEN, "lots");
        assert_eq!(sieve_from_env(), Sieve::default());

        std::env::remove_var(primemark_sieve::utils::env::SIEVE_MAX_LEN);
        std::env::set_var(primemark_sieve::utils::env::SIEVE_STRATEGY, "atkin");
        assert_eq!(sieve_from_env(), Sieve::default());

        std::env::remove_var(primemark_sieve::utils::env::SIEVE_STRATEGY);
        assert_eq!(sieve_from_env(), Sieve::default());
    }

    #[test]
    fn test_null_array_is_undersized() {
        let err = unsafe { mark(&Sieve::default(), ptr::null_mut(), 2) }.unwrap_err();
        assert_eq!(err, SieveError::BufferTooSmall { len: 0, requested: 2 });
    }
}
