//! Typed ID wrapper for movie-info records.
//!
//! Records are keyed by a store-assigned 64-bit integer. The newtype keeps
//! it from being confused with byte counts or ports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a movie-info record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieInfoId(i64);

impl MovieInfoId {
    /// Return the inner integer value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MovieInfoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieInfoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl From<i64> for MovieInfoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MovieInfoId> for i64 {
    fn from(id: MovieInfoId) -> Self {
        id.0
    }
}
