//! Networking layer for the API gateway.

pub mod api;
