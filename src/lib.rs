//! Counted: no_std values paired with a mutable occurrence count

#![no_std]
#![warn(missing_debug_implementations, missing_docs)]

extern crate alloc;

/// A value together with its count.
pub mod counted;
/// Errors.
pub mod error;
/// Frequency table of counted values.
pub mod tally;

mod fmt;
mod utils;

#[cfg(feature = "std")]
extern crate std;

pub use counted::Counted;
pub use error::CountError;
pub use tally::Tally;
