//! Route-parameter parsing shared by the DAO-scoped pages.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use governance::Address;

/// Parse the `:chain_id/:dao_id` route segment pair.
#[must_use]
pub fn parse_dao_route(chain_id: Option<&str>, dao_id: Option<&str>) -> Option<(u64, Address)> {
    let chain_id = chain_id?.parse::<u64>().ok()?;
    let dao = dao_id?.parse::<Address>().ok()?;
    Some((chain_id, dao))
}
