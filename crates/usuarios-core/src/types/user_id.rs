//! User id type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A server-assigned user id.
///
/// Ids are handed out by the backend on creation and never change
/// afterwards. Any `u64` is accepted here; whether a row with that id exists
/// is for the backend to say.
///
/// # Example
///
/// ```
/// use usuarios_core::UserId;
///
/// let id: UserId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::UserId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        trimmed.parse::<u64>().map(Self).map_err(|e| {
            InvalidInputError::UserId {
                value: s.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
