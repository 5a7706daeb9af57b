use crate::error::ConfigError;

use super::options::{SieveStrategy, DEFAULT_MAX_LEN, DEFAULT_STRATEGY};

/// Selects the marking strategy: `eratosthenes` (default) or `trial-division`.
pub const SIEVE_STRATEGY: &str = "SIEVE_STRATEGY";

/// Overrides the largest length a caller may request.
pub const SIEVE_MAX_LEN: &str = "SIEVE_MAX_LEN";

/// Gets the marking strategy, defaulting to the sieve of Eratosthenes.
pub fn sieve_strategy() -> Result<SieveStrategy, ConfigError> {
    match std::env::var(SIEVE_STRATEGY) {
        Ok(val) => parse_strategy(&val),
        Err(_) => Ok(DEFAULT_STRATEGY),
    }
}

/// Gets the largest length a caller may request.
pub fn max_len() -> Result<usize, ConfigError> {
    match std::env::var(SIEVE_MAX_LEN) {
        Ok(val) => parse_max_len(&val),
        Err(_) => Ok(DEFAULT_MAX_LEN),
    }
}

pub(crate) fn parse_strategy(val: &str) -> Result<SieveStrategy, ConfigError> {
    val.trim().parse().map_err(|err: strum::ParseError| ConfigError::InvalidValue {
        var: SIEVE_STRATEGY,
        value: val.to_string(),
        reason: err.to_string(),
    })
}

pub(crate) fn parse_max_len(val: &str) -> Result<usize, ConfigError> {
    val.trim().parse().map_err(|err: std::num::ParseIntError| ConfigError::InvalidValue {
        var: SIEVE_MAX_LEN,
        value: val.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("eratosthenes"), Ok(SieveStrategy::Eratosthenes));
        assert_eq!(parse_strategy(" trial-division\n"), Ok(SieveStrategy::TrialDivision));

        let err = parse_strategy("atkin").unwrap_err();
        assert!(err.to_string().starts_with("SIEVE_STRATEGY has an invalid value \"atkin\""));
    }

    #[test]
    fn test_parse_max_len() {
        assert_eq!(parse_max_len("1000"), Ok(1000));
        assert_eq!(parse_max_len("0"), Ok(0));
        assert!(parse_max_len("-1").is_err());
        assert!(parse_max_len("1e6").is_err());
    }
}
