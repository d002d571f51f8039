//! Indexer queries for DAOs, projects, and proposals.
//!
//! DESIGN
//! ======
//! Query documents and response parsing are pure so the wire contract is
//! testable natively; only the POST itself is hydrate-gated. Responses come
//! back in a `data` envelope keyed by entity name.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use governance::Address;
use governance::model::{Dao, Project, ProjectRecord, Proposal};

/// Query document for every DAO the indexer tracks.
pub const DAOS_QUERY: &str = "query ListDaos { daos { id token { name symbol } } }";

/// Query document for one DAO by address.
pub const DAO_QUERY: &str =
    "query GetDao($dao: ID!) { dao(id: $dao) { id token { name symbol } } }";

/// Query document for a DAO's projects.
pub const PROJECTS_QUERY: &str = "query ListProjects($dao: ID!) { projects(dao: $dao) { projectID manager budget deadline goals } }";

/// Query document for a DAO's proposals.
pub const PROPOSALS_QUERY: &str =
    "query ListProposals($dao: ID!) { proposals(dao: $dao) { serial description } }";

/// Build a query request body.
#[must_use]
pub fn query_body(query: &str, variables: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "query": query, "variables": variables })
}

/// Variables selecting one DAO.
#[must_use]
pub fn dao_variables(dao: Address) -> serde_json::Value {
    serde_json::json!({ "dao": dao.to_string() })
}

/// Parse the `daos` list envelope.
///
/// # Errors
///
/// Returns a message when the envelope or rows are malformed.
pub fn parse_daos(body: &serde_json::Value) -> Result<Vec<Dao>, String> {
    let rows = data_field(body, "daos")?;
    serde_json::from_value(rows.clone()).map_err(|e| e.to_string())
}

/// Parse the single-DAO envelope.
///
/// # Errors
///
/// Returns a message when the DAO is missing or malformed.
pub fn parse_dao(body: &serde_json::Value) -> Result<Dao, String> {
    let row = data_field(body, "dao")?;
    serde_json::from_value(row.clone()).map_err(|e| e.to_string())
}

/// Parse the `projects` envelope, decoding each embedded goals string.
///
/// # Errors
///
/// Returns a message when the envelope, a row, or a goals string is
/// malformed.
pub fn parse_projects(body: &serde_json::Value) -> Result<Vec<Project>, String> {
    let rows = data_field(body, "projects")?;
    let records: Vec<ProjectRecord> =
        serde_json::from_value(rows.clone()).map_err(|e| e.to_string())?;
    records
        .into_iter()
        .map(|record| Project::from_record(record).map_err(|e| e.to_string()))
        .collect()
}

/// Parse the `proposals` envelope.
///
/// # Errors
///
/// Returns a message when the envelope or rows are malformed.
pub fn parse_proposals(body: &serde_json::Value) -> Result<Vec<Proposal>, String> {
    let rows = data_field(body, "proposals")?;
    serde_json::from_value(rows.clone()).map_err(|e| e.to_string())
}

fn data_field<'a>(
    body: &'a serde_json::Value,
    field: &str,
) -> Result<&'a serde_json::Value, String> {
    body.get("data")
        .and_then(|data| data.get(field))
        .filter(|value| !value.is_null())
        .ok_or_else(|| format!("indexer response missing `{field}`"))
}

#[cfg(any(test, feature = "hydrate"))]
fn query_failed_message(status: u16) -> String {
    format!("indexer request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn post_query(endpoint: &str, body: serde_json::Value) -> Result<serde_json::Value, String> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(query_failed_message(resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Fetch every DAO the indexer tracks.
///
/// # Errors
///
/// Returns an error string on transport failure or a malformed response.
pub async fn fetch_daos(endpoint: &str) -> Result<Vec<Dao>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_query(endpoint, query_body(DAOS_QUERY, serde_json::json!({}))).await?;
        parse_daos(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err("not available on server".to_owned())
    }
}

/// Fetch one DAO by address.
///
/// # Errors
///
/// Returns an error string on transport failure or a malformed response.
pub async fn fetch_dao(endpoint: &str, dao: Address) -> Result<Dao, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_query(endpoint, query_body(DAO_QUERY, dao_variables(dao))).await?;
        parse_dao(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, dao);
        Err("not available on server".to_owned())
    }
}

/// Fetch a DAO's projects.
///
/// # Errors
///
/// Returns an error string on transport failure or a malformed response.
pub async fn fetch_projects(endpoint: &str, dao: Address) -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_query(endpoint, query_body(PROJECTS_QUERY, dao_variables(dao))).await?;
        parse_projects(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, dao);
        Err("not available on server".to_owned())
    }
}

/// Fetch a DAO's proposals.
///
/// # Errors
///
/// Returns an error string on transport failure or a malformed response.
pub async fn fetch_proposals(endpoint: &str, dao: Address) -> Result<Vec<Proposal>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_query(endpoint, query_body(PROPOSALS_QUERY, dao_variables(dao))).await?;
        parse_proposals(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, dao);
        Err("not available on server".to_owned())
    }
}
