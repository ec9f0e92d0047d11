//! Crate-wide error handling.

use serde::{Deserialize, Serialize};

/// A crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// The errors the query core can surface.
///
/// Joins never error on unmatched keys (inner-join semantics silently drop
/// them); `NotFound` only arises from explicit point lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// An aggregate (min/max/average) was requested over zero elements.
    EmptyInput(String),
    /// A point lookup found no row for the given key.
    NotFound(String),
    /// The canonical dataset failed validation at construction time.
    FixtureInvariant(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput(msg) => write!(f, "empty input: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::FixtureInvariant(msg) => write!(f, "fixture invariant violated: {msg}"),
        }
    }
}

/// Constructs an `Err(Error::FixtureInvariant)` from a format string.
#[macro_export]
macro_rules! errinvariant {
    ($($args:tt)*) => {
        ::std::result::Result::Err($crate::common::Error::FixtureInvariant(format!($($args)*)))
    };
}
