//! Fetch lifecycle as an explicit tagged state.
//!
//! DESIGN
//! ======
//! One enum instead of `loading`/`error` boolean pairs, so impossible
//! combinations (errored *and* loaded) cannot be represented.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// Lifecycle of a one-shot data fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No request issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Request completed with data.
    Loaded(T),
    /// Request failed terminally; no retry is attempted.
    Failed(String),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded payload, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
