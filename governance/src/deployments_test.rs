use super::*;

#[test]
fn dev_chain_has_all_endpoints() {
    assert!(project_management_extension(DEV_CHAIN_ID).is_some());
    assert_eq!(indexer_endpoint(DEV_CHAIN_ID), Some("/graph"));
    assert_eq!(rpc_endpoint(DEV_CHAIN_ID), Some("/rpc"));
}

#[test]
fn unknown_chains_are_unsupported_everywhere() {
    assert_eq!(project_management_extension(1), None);
    assert_eq!(indexer_endpoint(1), None);
    assert_eq!(rpc_endpoint(999_999), None);
}
