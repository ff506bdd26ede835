//! Upstream proxy services.
//!
//! Each service wraps one external API behind a thin fetch function plus
//! pure shaping helpers, so the interesting logic stays unit-testable
//! without network access.

pub mod reddit;
pub mod youtube;
