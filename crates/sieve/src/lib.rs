//! Marks the primes below a bound into caller-owned indicator arrays.
//!
//! The entry point is [mark_primes], which writes `1` into every prime slot of `indicator[0..n]`
//! and `0` everywhere else. [Sieve] carries the configuration ([SieveOpts]), [PrimeTable] is the
//! owned form, and [goldbach] builds on the tables to count prime partitions of even numbers.

mod error;
pub mod goldbach;
mod indicator;
mod sieve;
mod table;
pub mod utils;

pub use error::{ConfigError, ErrorKind, GoldbachError, SieveError};
pub use goldbach::{count_partitions, goldbach_partitions, goldbach_partitions_with, GoldbachRow};
pub use indicator::Indicator;
pub use sieve::{is_prime, mark_primes, sieve, Sieve};
pub use table::PrimeTable;
pub use utils::{setup_logger, SieveOpts, SieveStrategy};
