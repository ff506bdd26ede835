//! Small browser-facing utilities.

pub mod dates;
#[cfg(feature = "csr")]
pub mod dom;
pub mod interval;
