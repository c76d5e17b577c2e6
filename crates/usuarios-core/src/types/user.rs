//! User records.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user as stored by the backend.
///
/// Extra columns the backend may include in responses are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl User {
    /// Create a user value.
    pub fn new(id: UserId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// A row with the given id and no field values.
    pub fn blank(id: UserId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
        }
    }
}

/// A validated creation payload.
///
/// Only obtainable through [`UserForm::validate`](super::UserForm::validate),
/// so the length limits always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    name: String,
    description: String,
}

impl NewUser {
    pub(crate) fn new_unchecked(name: String, description: String) -> Self {
        Self { name, description }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attach a server-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
