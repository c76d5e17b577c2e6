//! User store trait.

use async_trait::async_trait;

use crate::error::RequestFailed;
use crate::types::{NewUser, User, UserId};

/// Remote collection of users.
///
/// This is the capability the controller is built on. Each operation either
/// succeeds or fails with [`RequestFailed`]; implementations never retry.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the full collection, in the order the backend returns it.
    async fn list(&self) -> Result<Vec<User>, RequestFailed>;

    /// Create a user.
    ///
    /// Returns the created user if the backend echoed it back.
    async fn create(&self, user: &NewUser) -> Result<Option<User>, RequestFailed>;

    /// Replace every field of an existing user.
    ///
    /// Returns the updated user if the backend echoed it back.
    async fn update(&self, user: &User) -> Result<Option<User>, RequestFailed>;

    /// Delete a user.
    async fn delete(&self, id: UserId) -> Result<(), RequestFailed>;
}

#[async_trait]
impl<T> UserStore for std::sync::Arc<T>
where
    T: UserStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<User>, RequestFailed> {
        (**self).list().await
    }

    async fn create(&self, user: &NewUser) -> Result<Option<User>, RequestFailed> {
        (**self).create(user).await
    }

    async fn update(&self, user: &User) -> Result<Option<User>, RequestFailed> {
        (**self).update(user).await
    }

    async fn delete(&self, id: UserId) -> Result<(), RequestFailed> {
        (**self).delete(id).await
    }
}
