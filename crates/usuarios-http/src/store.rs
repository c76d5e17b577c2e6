//! REST-backed user store.

use async_trait::async_trait;
use tracing::{debug, instrument};

use usuarios_core::{NewUser, RequestFailed, User, UserId, UserStore};

use crate::api_url::ApiUrl;
use crate::client::RestClient;

/// A [`UserStore`] talking to the users REST backend.
///
/// | Operation | Request |
/// |---|---|
/// | list | `GET /usuarios/` |
/// | get | `GET /usuarios/{id}` |
/// | create | `POST /usuarios/` |
/// | update | `PUT /usuarios/{id}` |
/// | delete | `DELETE /usuarios/{id}` |
///
/// Requests carry no credentials and no timeout.
#[derive(Debug, Clone)]
pub struct HttpUserStore {
    client: RestClient,
}

impl HttpUserStore {
    /// Create a store for the backend at `api`.
    pub fn new(api: ApiUrl) -> Self {
        Self {
            client: RestClient::new(api),
        }
    }

    /// Returns the backend this store talks to.
    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }

    /// Fetch a single user.
    #[instrument(skip(self), fields(api = %self.api()))]
    pub async fn get(&self, id: UserId) -> Result<User, RequestFailed> {
        debug!(%id, "Getting user");
        self.client.get(&self.api().user_url(id)).await
    }

    /// Check that the backend answers at its root.
    #[instrument(skip(self), fields(api = %self.api()))]
    pub async fn ping(&self) -> Result<serde_json::Value, RequestFailed> {
        debug!("Pinging backend");
        self.client.get(&self.api().root_url()).await
    }
}

#[async_trait]
impl UserStore for HttpUserStore {
    #[instrument(skip(self), fields(api = %self.api()))]
    async fn list(&self) -> Result<Vec<User>, RequestFailed> {
        debug!("Listing users");
        self.client.get(&self.api().users_url()).await
    }

    #[instrument(skip(self, user), fields(api = %self.api()))]
    async fn create(&self, user: &NewUser) -> Result<Option<User>, RequestFailed> {
        debug!(name = user.name(), "Creating user");
        self.client.post(&self.api().users_url(), user).await
    }

    #[instrument(skip(self, user), fields(api = %self.api(), id = %user.id))]
    async fn update(&self, user: &User) -> Result<Option<User>, RequestFailed> {
        debug!("Updating user");
        self.client.put(&self.api().user_url(user.id), user).await
    }

    #[instrument(skip(self), fields(api = %self.api()))]
    async fn delete(&self, id: UserId) -> Result<(), RequestFailed> {
        debug!(%id, "Deleting user");
        self.client.delete(&self.api().user_url(id)).await
    }
}
