use crate::fixtures::{Fixtures, pmtest_dao};

use super::*;

fn dev_state() -> AppState {
    AppState::new(Fixtures::dev(), std::env::temp_dir())
}

#[tokio::test]
async fn rpc_handler_answers_chain_id() {
    let Json(response) = rpc(
        State(dev_state()),
        Json(serde_json::json!({
            "jsonrpc": "2.0", "id": 1, "method": "eth_chainId", "params": [],
        })),
    )
    .await;
    assert_eq!(response["result"], "0x7a69");
}

#[tokio::test]
async fn graph_handler_answers_project_queries() {
    let Json(response) = graph(
        State(dev_state()),
        Json(serde_json::json!({
            "query": "query ListProjects($dao: ID!) { projects }",
            "variables": { "dao": pmtest_dao().to_string() },
        })),
    )
    .await;
    assert_eq!(response["data"]["projects"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, "ok");
}
