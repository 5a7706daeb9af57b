pub mod env;
mod logger;
mod options;

pub use logger::*;
pub use options::*;
