use governance::deployments;

use super::*;

#[test]
fn dev_fixtures_cover_both_daos() {
    let fixtures = Fixtures::dev();
    assert_eq!(fixtures.chain_id, deployments::DEV_CHAIN_ID);

    let pmtest = fixtures.dao(pmtest_dao()).unwrap();
    assert_eq!(pmtest.dao.token.name, "PMTest");
    assert_eq!(pmtest.projects.len(), 2);
    assert!(pmtest.extension_enabled);

    let pmtest2 = fixtures.dao(pmtest2_dao()).unwrap();
    assert_eq!(pmtest2.dao.token.name, "PMTest2");
    assert_eq!(pmtest2.projects[0].project_id, 112);
    assert!(!pmtest2.extension_enabled);
}

#[test]
fn project_goals_strings_decode_as_goal_lists() {
    let fixtures = Fixtures::dev();
    for fixture in &fixtures.daos {
        for project in &fixture.projects {
            let goals: Vec<governance::model::Goal> =
                serde_json::from_str(&project.goals).unwrap();
            assert_eq!(goals.len(), 1, "project {}", project.project_id);
        }
    }
}

#[test]
fn balances_default_to_zero_for_unknown_pairs() {
    let fixtures = Fixtures::dev();
    assert!(!fixtures.balance_of(pmtest_dao(), e2e_account()).is_zero());
    assert!(fixtures.balance_of(pmtest_dao(), other_manager()).is_zero());
    assert!(fixtures.balance_of(Address::ZERO, e2e_account()).is_zero());
}

#[test]
fn extension_flag_only_reads_enabled_for_the_deployed_extension() {
    let fixtures = Fixtures::dev();
    let extension = deployments::project_management_extension(fixtures.chain_id).unwrap();

    assert!(fixtures.extension_enabled(pmtest_dao(), extension));
    assert!(!fixtures.extension_enabled(pmtest2_dao(), extension));
    assert!(!fixtures.extension_enabled(pmtest_dao(), Address::ZERO));
}
