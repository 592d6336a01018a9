//! store::http
//!
//! HTTP tree store implementation.
//!
//! # Design
//!
//! This module implements the `TreeStore` trait against the tree store's
//! REST API:
//!
//! - `GET    {base}`      - list all trees
//! - `GET    {base}/{id}` - fetch one tree
//! - `POST   {base}`      - create a tree
//! - `PUT    {base}/{id}` - update a tree
//!
//! Requests wrap the canonical tree as `{"data": <tree>}` and responses
//! carry `{"id": <id>, "data": <tree>}`. The store is unauthenticated.
//!
//! # Example
//!
//! ```ignore
//! use tagtree::store::http::HttpTreeStore;
//! use tagtree::store::TreeStore;
//!
//! let store = HttpTreeStore::new("http://localhost:8000/trees");
//! let records = store.list().await?;
//! for record in records {
//!     println!("tree {}: {}", record.id, record.data.name);
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{StoreError, TreeRecord, TreeStore};
use crate::core::canonical::CanonicalNode;

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "tagtree-cli";

/// Request body for create and update calls.
#[derive(Debug, Serialize)]
struct TreePayload<'a> {
    data: &'a CanonicalNode,
}

/// Error body shape returned by the backend.
#[derive(Debug, Deserialize)]
struct ServerErrorResponse {
    detail: String,
}

/// HTTP tree store implementation.
///
/// Holds a connection-pooling [`reqwest::Client`]; clone-cheap and safe to
/// share across tasks, though callers must still serialize saves per tree
/// slot (see [`TreeStore`]).
#[derive(Debug, Clone)]
pub struct HttpTreeStore {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the tree collection (e.g. `http://localhost:8000/trees`)
    base_url: String,
}

impl HttpTreeStore {
    /// Create a new HTTP tree store for the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT_VALUE)
                .build()
                .expect("reqwest client builds"),
            base_url,
        }
    }

    /// Get the base URL this store talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for a single tree.
    fn tree_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Handle an API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::InvalidResponse(e.to_string()))
        } else {
            Err(Self::error_from_response(response, status).await)
        }
    }

    /// Map an error response to a `StoreError`.
    async fn error_from_response(response: Response, status: StatusCode) -> StoreError {
        let message = match response.json::<ServerErrorResponse>().await {
            Ok(err) => err.detail,
            Err(_) => "Unknown error".to_string(),
        };

        match status {
            StatusCode::NOT_FOUND => StoreError::NotFound(message),
            _ if status.is_server_error() => StoreError::ApiError {
                status: status.as_u16(),
                message: format!("server error: {message}"),
            },
            _ => StoreError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl TreeStore for HttpTreeStore {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn list(&self) -> Result<Vec<TreeRecord>, StoreError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn get(&self, id: u64) -> Result<TreeRecord, StoreError> {
        let response = self
            .client
            .get(self.tree_url(id))
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn create(&self, data: &CanonicalNode) -> Result<TreeRecord, StoreError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&TreePayload { data })
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn update(&self, id: u64, data: &CanonicalNode) -> Result<TreeRecord, StoreError> {
        let response = self
            .client
            .put(self.tree_url(id))
            .json(&TreePayload { data })
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }
}
