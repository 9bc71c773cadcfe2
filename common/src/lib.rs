//! Recursive 8-bit arithmetic and the fixed-table drivers that exercise it.
//!
//! All values are `u8`. Every intermediate step wraps modulo 256, so results
//! past the representable range are truncated rather than reported.

pub mod arith;
pub mod constants;
pub mod driver;
pub mod error;

pub use arith::{factorial, recursive_multiply};
pub use driver::{run, Driver, FactorialDriver, MultiplyDriver};
pub use error::DriverError;
