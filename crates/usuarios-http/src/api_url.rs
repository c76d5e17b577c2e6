//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use usuarios_core::UserId;
use usuarios_core::error::{Error, InvalidInputError};

use crate::endpoints::USERS_PATH;

/// A validated base URL of the users backend.
///
/// The URL must be absolute, use `http` or `https`, and have a host. A
/// trailing slash is dropped so resource paths can be appended directly.
///
/// # Example
///
/// ```
/// use usuarios_http::ApiUrl;
/// use usuarios_core::UserId;
///
/// let api = ApiUrl::new("http://localhost:8000/").unwrap();
/// assert_eq!(api.users_url(), "http://localhost:8000/usuarios/");
/// assert_eq!(api.user_url(UserId::new(3)), "http://localhost:8000/usuarios/3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute http(s) with a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut normalized = url;
        let trimmed = normalized.path().trim_end_matches('/').to_string();
        normalized.set_path(&trimmed);
        normalized.set_query(None);
        normalized.set_fragment(None);

        Ok(Self(normalized))
    }

    /// URL of the users collection (`GET` to list, `POST` to create).
    pub fn users_url(&self) -> String {
        format!("{}{}", self.base(), USERS_PATH)
    }

    /// URL of a single user (`GET`, `PUT`, `DELETE`).
    pub fn user_url(&self, id: UserId) -> String {
        format!("{}{}{}", self.base(), USERS_PATH, id)
    }

    /// URL of the backend root, used as a health check.
    pub fn root_url(&self) -> String {
        format!("{}/", self.base())
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn base(&self) -> &str {
        // `Url` keeps a "/" path on bare hosts.
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    /// The backend's usual local address, `http://localhost:8000`.
    fn default() -> Self {
        Self(Url::parse(crate::DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.base())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
