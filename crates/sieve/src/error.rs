use thiserror::Error;

/// The class of failure a [`SieveError`] belongs to.
///
/// Marking has exactly one failure mode: the caller asked for something that cannot be done
/// without reading or writing out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// An invalid request to mark primes. Raised before any slot is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    #[error("invalid argument: length must be non-negative, got {0}")]
    NegativeLength(i64),
    #[error("invalid argument: indicator has {len} slots but {requested} were requested")]
    BufferTooSmall { len: usize, requested: usize },
    #[error("invalid argument: length {requested} exceeds the configured maximum {max_len}")]
    LengthTooLarge { requested: u64, max_len: usize },
}

impl SieveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeLength(_) | Self::BufferTooSmall { .. } | Self::LengthTooLarge { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// A malformed environment override for [`crate::SieveOpts`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    InvalidValue { var: &'static str, value: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoldbachError {
    #[error("range must satisfy 4 <= lo < hi < {upper}, got lo = {lo}, hi = {hi}")]
    OutOfRange { lo: usize, hi: usize, upper: usize },
    #[error(transparent)]
    Sieve(#[from] SieveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sieve_error_is_invalid_argument() {
        let errors = [
            SieveError::NegativeLength(-1),
            SieveError::BufferTooSmall { len: 3, requested: 4 },
            SieveError::LengthTooLarge { requested: 10, max_len: 5 },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(err.to_string().starts_with("invalid argument"));
        }
    }

    #[test]
    fn test_goldbach_wraps_sieve_error() {
        let err: GoldbachError = SieveError::NegativeLength(-7).into();
        assert_eq!(err.to_string(), "invalid argument: length must be non-negative, got -7");
    }
}
