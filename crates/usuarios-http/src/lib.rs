//! usuarios-http - REST-backed user store.
//!
//! [`HttpUserStore`] implements [`UserStore`](usuarios_core::UserStore) over
//! the backend's `/usuarios/` resource.
//!
//! # Example
//!
//! ```no_run
//! use usuarios_core::UserStore;
//! use usuarios_http::{ApiUrl, HttpUserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = HttpUserStore::new(ApiUrl::new("http://localhost:8000")?);
//! for user in store.list().await? {
//!     println!("{}: {}", user.id, user.name);
//! }
//! # Ok(())
//! # }
//! ```

mod api_url;
mod client;
mod endpoints;
mod store;

pub use api_url::ApiUrl;
pub use endpoints::USERS_PATH;
pub use store::HttpUserStore;

/// Where the backend listens unless told otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
