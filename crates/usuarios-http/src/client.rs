//! REST HTTP client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use usuarios_core::RequestFailed;

use crate::api_url::ApiUrl;
use crate::endpoints::ErrorResponse;

/// JSON-over-HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl RestClient {
    /// Create a client for the given backend.
    pub fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("usuarios/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers())
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// `GET` a JSON document.
    #[instrument(skip(self))]
    pub async fn get<R>(&self, url: &str) -> Result<R, RequestFailed>
    where
        R: DeserializeOwned,
    {
        debug!("GET");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let body = self.handle_response(response).await?;
        decode(&body)
    }

    /// `POST` a JSON body; the response body may be empty.
    #[instrument(skip(self, body))]
    pub async fn post<B, R>(&self, url: &str, body: &B) -> Result<Option<R>, RequestFailed>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("POST");
        trace!(?body, "request body");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        let body = self.handle_response(response).await?;
        Ok(decode_optional(&body))
    }

    /// `PUT` a JSON body; the response body may be empty.
    #[instrument(skip(self, body))]
    pub async fn put<B, R>(&self, url: &str, body: &B) -> Result<Option<R>, RequestFailed>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("PUT");
        trace!(?body, "request body");
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        let body = self.handle_response(response).await?;
        Ok(decode_optional(&body))
    }

    /// `DELETE` a resource, ignoring any response body.
    #[instrument(skip(self))]
    pub async fn delete(&self, url: &str) -> Result<(), RequestFailed> {
        debug!("DELETE");
        let response = self.client.delete(url).send().await.map_err(transport)?;
        self.handle_response(response).await?;
        Ok(())
    }

    /// Read the body of a successful response, or turn the error into a
    /// [`RequestFailed`].
    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<u8>, RequestFailed> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.bytes().await.map_err(transport)?;
            Ok(body.to_vec())
        } else {
            Err(self.parse_error_response(response).await)
        }
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> RequestFailed {
        let status = response.status();

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message(),
            Err(_) => None,
        };

        RequestFailed::with_status(
            status.as_u16(),
            message.unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string()),
        )
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Map a transport-level failure (connect, TLS, body read) to [`RequestFailed`].
pub(crate) fn transport(err: reqwest::Error) -> RequestFailed {
    if err.is_timeout() {
        RequestFailed::new(format!("request timed out: {}", err))
    } else if err.is_connect() {
        RequestFailed::new(format!("connection failed: {}", err))
    } else {
        RequestFailed::new(format!("HTTP error: {}", err))
    }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, RequestFailed> {
    serde_json::from_slice(body)
        .map_err(|e| RequestFailed::new(format!("invalid response body: {}", e)))
}

/// Writes may answer with the stored document or with nothing at all.
fn decode_optional<R: DeserializeOwned>(body: &[u8]) -> Option<R> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Ignoring unrecognised response body");
            None
        }
    }
}
