//! Thin HTTP client over the JSON record store.
//!
//! Centralizes base-url handling, JSON encoding, and status checking so the
//! repository implementations stay declarative. The backend speaks the
//! json-server dialect: plain collections under `/menu`, `/orders`, `/users`,
//! query-string filters, and `_sort=-field` for descending order.

use comanda_core::error::{ComandaError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A reqwest wrapper bound to one API base url.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a client for the given base url (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn failure(method: &str, path: &str, err: reqwest::Error) -> ComandaError {
        ComandaError::data_access(format!("{method} {path} failed: {err}"))
    }

    /// GET a JSON payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        self.client
            .get(self.url(path))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::failure("GET", path, e))?
            .json::<T>()
            .await
            .map_err(|e| Self::failure("GET", path, e))
    }

    /// POST a JSON body, returning the created record.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        tracing::debug!(path, "POST");
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::failure("POST", path, e))?
            .json::<T>()
            .await
            .map_err(|e| Self::failure("POST", path, e))
    }

    /// PATCH a JSON body (partial update), returning the updated record.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(path, "PATCH");
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::failure("PATCH", path, e))?
            .json::<T>()
            .await
            .map_err(|e| Self::failure("PATCH", path, e))
    }

    /// DELETE a record. The backend returns no useful body here, so success
    /// is reported as `true`.
    pub async fn delete(&self, path: &str) -> Result<bool> {
        tracing::debug!(path, "DELETE");
        self.client
            .delete(self.url(path))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::failure("DELETE", path, e))?;
        Ok(true)
    }
}
