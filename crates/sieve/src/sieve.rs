use tracing::instrument;

use crate::{
    error::{ConfigError, SieveError},
    indicator::Indicator,
    table::PrimeTable,
    utils::{SieveOpts, SieveStrategy},
};

/// Marks primality into caller-owned indicator arrays according to a [`SieveOpts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sieve {
    opts: SieveOpts,
}

impl Sieve {
    pub fn new(opts: SieveOpts) -> Self {
        Self { opts }
    }

    /// Creates a [Sieve] configured from the environment. See [`SieveOpts::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        SieveOpts::from_env().map(Self::new)
    }

    pub fn opts(&self) -> &SieveOpts {
        &self.opts
    }

    /// Sets `indicator[i]` to [`Indicator::PRIME`] if `i` is prime and to [`Indicator::NOT_PRIME`]
    /// otherwise, for every `i` in `0..n`.
    ///
    /// Slots at index `n` and beyond are left untouched. The request is validated before anything
    /// is written, so on error the indicator is exactly as the caller left it.
    ///
    /// # Errors
    ///
    /// Returns a [`SieveError`] if `n` is negative, larger than the configured maximum, or larger
    /// than `indicator.len()`.
    #[instrument(name = "mark primes", level = "debug", skip_all, fields(n = n, strategy = %self.opts.strategy))]
    pub fn mark<T: Indicator>(&self, indicator: &mut [T], n: i64) -> Result<(), SieveError> {
        let n = self.validate(indicator.len(), n).inspect_err(|err| {
            tracing::debug!("rejected request: {err}");
        })?;

        let slots = &mut indicator[..n];
        match self.opts.strategy {
            SieveStrategy::Eratosthenes => eratosthenes(slots),
            SieveStrategy::TrialDivision => trial_division(slots),
        }
        tracing::trace!(marked = n, "done");
        Ok(())
    }

    /// Builds an owned [PrimeTable] covering `0..n`.
    ///
    /// The length is checked against the configured maximum before the table is allocated.
    #[instrument(name = "build prime table", level = "debug", skip(self))]
    pub fn table(&self, n: usize) -> Result<PrimeTable, SieveError> {
        let requested = i64::try_from(n).map_err(|_| SieveError::LengthTooLarge {
            requested: n as u64,
            max_len: self.opts.max_len,
        })?;
        self.validate(n, requested)?;

        let mut marks = vec![false; n];
        self.mark(&mut marks, requested)?;
        Ok(PrimeTable::from_marks(marks))
    }

    /// Checks a request for `n` slots against a buffer of `len` slots, returning `n` as an index.
    pub fn validate(&self, len: usize, n: i64) -> Result<usize, SieveError> {
        let wide = u64::try_from(n).map_err(|_| SieveError::NegativeLength(n))?;
        let requested = usize::try_from(wide)
            .ok()
            .filter(|&requested| requested <= self.opts.max_len)
            .ok_or(SieveError::LengthTooLarge { requested: wide, max_len: self.opts.max_len })?;
        if len < requested {
            return Err(SieveError::BufferTooSmall { len, requested });
        }
        Ok(requested)
    }
}

/// Marks `indicator[0..n]` with the default [`SieveOpts`].
///
/// # Example
///
/// ```
/// let mut primes = [0i32; 10];
/// primemark_sieve::mark_primes(&mut primes, 10).unwrap();
/// assert_eq!(primes, [0, 0, 1, 1, 0, 1, 0, 1, 0, 0]);
/// ```
pub fn mark_primes<T: Indicator>(indicator: &mut [T], n: i64) -> Result<(), SieveError> {
    Sieve::default().mark(indicator, n)
}

/// Builds an owned [PrimeTable] covering `0..n` with the default [`SieveOpts`].
pub fn sieve(n: usize) -> Result<PrimeTable, SieveError> {
    Sieve::default().table(n)
}

/// Decides the primality of a single value by trial division.
pub fn is_prime(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n.is_multiple_of(2) {
        return false;
    }
    let mut d = 3;
    while d <= n / d {
        if n.is_multiple_of(d) {
            return false;
        }
        d += 2;
    }
    true
}

fn eratosthenes<T: Indicator>(slots: &mut [T]) {
    let n = slots.len();
    slots.fill(T::PRIME);
    slots.iter_mut().take(2).for_each(|slot| *slot = T::NOT_PRIME);

    // Every composite below `n` has a prime factor `i` with `i * i < n`.
    let mut i = 2usize;
    while i.checked_mul(i).is_some_and(|square| square < n) {
        if slots[i].is_marked() {
            slots[i * i..].iter_mut().step_by(i).for_each(|slot| *slot = T::NOT_PRIME);
        }
        i += 1;
    }
}

fn trial_division<T: Indicator>(slots: &mut [T]) {
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = if is_prime(i as u64) { T::PRIME } else { T::NOT_PRIME };
    }
}
