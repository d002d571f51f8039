//! Fixture-backed indexer query endpoint.
//!
//! Dispatches on the operation name in the query document — the same
//! documents the client's `net::graph` module sends — and answers from the
//! fixture set in the indexer's `data` envelope shape.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use governance::Address;

use crate::fixtures::Fixtures;

/// Handle one indexer query request body.
#[must_use]
pub fn handle(fixtures: &Fixtures, request: &serde_json::Value) -> serde_json::Value {
    let query = request
        .get("query")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();

    if query.contains("ListDaos") {
        let daos: Vec<_> = fixtures.daos.iter().map(|fixture| &fixture.dao).collect();
        return data(serde_json::json!({ "daos": daos }));
    }
    if query.contains("GetDao") {
        return match dao_variable(fixtures, request) {
            Some(fixture) => data(serde_json::json!({ "dao": fixture.dao })),
            None => data(serde_json::json!({ "dao": null })),
        };
    }
    if query.contains("ListProjects") {
        return match dao_variable(fixtures, request) {
            Some(fixture) => data(serde_json::json!({ "projects": fixture.projects })),
            None => data(serde_json::json!({ "projects": [] })),
        };
    }
    if query.contains("ListProposals") {
        return match dao_variable(fixtures, request) {
            Some(fixture) => data(serde_json::json!({ "proposals": fixture.proposals })),
            None => data(serde_json::json!({ "proposals": [] })),
        };
    }

    serde_json::json!({ "errors": [{ "message": "unsupported query" }] })
}

fn dao_variable<'a>(
    fixtures: &'a Fixtures,
    request: &serde_json::Value,
) -> Option<&'a crate::fixtures::FixtureDao> {
    let address: Address = request
        .get("variables")
        .and_then(|variables| variables.get("dao"))
        .and_then(serde_json::Value::as_str)?
        .parse()
        .ok()?;
    fixtures.dao(address)
}

fn data(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "data": value })
}
