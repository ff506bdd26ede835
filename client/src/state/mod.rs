//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module is a plain struct provided to the component tree as an
//! `RwSignal` context. Keeping the logic on the structs (not in components)
//! lets the navigation and fetch rules run under native `cargo test`.

pub mod blog;
pub mod carousel;
pub mod episodes;
pub mod fetch;
