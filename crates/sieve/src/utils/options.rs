use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ConfigError;

use super::env;

/// Largest length a caller can request by default: everything a C `int` can address.
pub const DEFAULT_MAX_LEN: usize = i32::MAX as usize;

pub const DEFAULT_STRATEGY: SieveStrategy = SieveStrategy::Eratosthenes;

/// How primality is decided for each slot. Every strategy produces identical output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum SieveStrategy {
    /// Strike out the multiples of every prime up to `sqrt(n)`.
    #[default]
    Eratosthenes,
    /// Test each index against every divisor `d` with `d * d <= i`.
    TrialDivision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SieveOpts {
    pub strategy: SieveStrategy,
    pub max_len: usize,
}

impl Default for SieveOpts {
    fn default() -> Self {
        Self { strategy: DEFAULT_STRATEGY, max_len: DEFAULT_MAX_LEN }
    }
}

impl SieveOpts {
    /// Reads the options from the environment, falling back to the defaults for unset variables.
    ///
    /// See [`env::SIEVE_STRATEGY`] and [`env::SIEVE_MAX_LEN`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { strategy: env::sieve_strategy()?, max_len: env::max_len()? })
    }

    pub fn with_strategy(mut self, strategy: SieveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}
