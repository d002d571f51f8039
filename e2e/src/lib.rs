//! End-to-end harness for the DAO project-management app.
//!
//! This crate targets the harness server from the outside: it boots the
//! fixture-backed server (or targets a live one via `E2E_BASE_URL`), then
//! drives the same request builders and response parsers the browser client
//! uses — over real HTTP — and feeds the results through the governance
//! submission flow and card view-models the pages render.

use governance::model::{Dao, Project, Proposal};
use governance::{Address, U256, abi};

/// Error type for e2e harness operations.
#[derive(Debug, thiserror::Error)]
pub enum E2eError {
    /// An HTTP request to the harness failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Binding or spawning the in-process harness failed.
    #[error("harness io error: {0}")]
    Io(#[from] std::io::Error),
    /// The harness answered, but the payload did not parse.
    #[error("harness response invalid: {0}")]
    Service(String),
}

/// Base URL of the harness under test.
///
/// Honors `E2E_BASE_URL` when set; otherwise boots the fixture server
/// in-process on an ephemeral port.
///
/// # Errors
///
/// Returns an error when the ephemeral listener cannot be bound.
pub async fn harness_url() -> Result<String, E2eError> {
    if let Ok(url) = std::env::var("E2E_BASE_URL") {
        if !url.is_empty() {
            return Ok(url);
        }
    }

    let state = server::state::AppState::new(server::fixtures::Fixtures::dev(), std::env::temp_dir());
    let app = server::routes::app(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

/// HTTP driver speaking the client's wire protocol against a harness.
pub struct E2eClient {
    http: reqwest::Client,
    base_url: String,
}

impl E2eClient {
    /// Create a driver for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// POST a request body to an endpoint and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or non-success statuses.
    pub async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, E2eError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the DAO list the home page renders.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or malformed envelopes.
    pub async fn daos(&self) -> Result<Vec<Dao>, E2eError> {
        let body = client::net::graph::query_body(
            client::net::graph::DAOS_QUERY,
            serde_json::json!({}),
        );
        let response = self.post("/graph", &body).await?;
        client::net::graph::parse_daos(&response).map_err(E2eError::Service)
    }

    /// Fetch a DAO's projects, goals decoded.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or malformed envelopes.
    pub async fn projects(&self, dao: Address) -> Result<Vec<Project>, E2eError> {
        let body = client::net::graph::query_body(
            client::net::graph::PROJECTS_QUERY,
            client::net::graph::dao_variables(dao),
        );
        let response = self.post("/graph", &body).await?;
        client::net::graph::parse_projects(&response).map_err(E2eError::Service)
    }

    /// Fetch a DAO's proposals.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or malformed envelopes.
    pub async fn proposals(&self, dao: Address) -> Result<Vec<Proposal>, E2eError> {
        let body = client::net::graph::query_body(
            client::net::graph::PROPOSALS_QUERY,
            client::net::graph::dao_variables(dao),
        );
        let response = self.post("/graph", &body).await?;
        client::net::graph::parse_proposals(&response).map_err(E2eError::Service)
    }

    /// Forced manager-balance read, in the shape the submission flow consumes.
    pub async fn manager_balance(&self, dao: Address, holder: Address) -> Result<U256, String> {
        let result = self
            .eth_call(dao, client::net::rpc::balance_of_calldata(holder))
            .await?;
        abi::decode_uint(&result).ok_or_else(|| "malformed balance result".to_owned())
    }

    /// Fresh extension-enabled read, in the shape the submission flow consumes.
    pub async fn extension_enabled(
        &self,
        dao: Address,
        extension: Address,
    ) -> Result<bool, String> {
        let result = self
            .eth_call(dao, client::net::rpc::extensions_calldata(extension))
            .await?;
        abi::decode_bool(&result).ok_or_else(|| "malformed extension result".to_owned())
    }

    async fn eth_call(&self, to: Address, calldata: Vec<u8>) -> Result<Vec<u8>, String> {
        let body = client::net::rpc::request_body(
            "eth_call",
            client::net::rpc::eth_call_params(to, &calldata),
        );
        let response = self
            .post("/rpc", &body)
            .await
            .map_err(|error| error.to_string())?;
        client::net::rpc::parse_result_bytes(&response)
    }
}
