use alloy_primitives::address;

use super::*;

fn sample_goals() -> Vec<Goal> {
    vec![Goal {
        goal_title: "PM testing".to_owned(),
        goal_link: "https://github.com/orgs/example/projects/1".to_owned(),
        goal_description: "Track **everything**.".to_owned(),
    }]
}

#[test]
fn goals_round_trip_losslessly_through_json() {
    let goals = sample_goals();
    let encoded = serde_json::to_string(&goals).unwrap();
    let decoded: Vec<Goal> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, goals);
}

#[test]
fn goals_serialize_with_camel_case_keys_in_declaration_order() {
    let encoded = serde_json::to_string(&sample_goals()).unwrap();
    let title_at = encoded.find("\"goalTitle\"").unwrap();
    let link_at = encoded.find("\"goalLink\"").unwrap();
    let description_at = encoded.find("\"goalDescription\"").unwrap();
    assert!(title_at < link_at && link_at < description_at);
}

#[test]
fn project_record_deserializes_wire_names() {
    let raw = r#"{
        "projectID": 112,
        "manager": "0x8791f1612453a817919697ffa4895b17f6c77929",
        "budget": "10000",
        "deadline": 7972128000,
        "goals": "[{\"goalTitle\":\"PM testing\",\"goalLink\":\"https://example.org\",\"goalDescription\":\"\"}]"
    }"#;
    let record: ProjectRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.project_id, 112);
    assert_eq!(
        record.manager,
        address!("8791f1612453a817919697ffA4895b17F6C77929")
    );

    let project = Project::from_record(record).unwrap();
    assert_eq!(project.goals.len(), 1);
    assert_eq!(project.goals[0].goal_title, "PM testing");
}

#[test]
fn project_from_record_rejects_malformed_goals() {
    let record = ProjectRecord {
        project_id: 1,
        manager: Address::ZERO,
        budget: "1".to_owned(),
        deadline: 0,
        goals: "not json".to_owned(),
    };
    assert!(Project::from_record(record).is_err());
}

#[test]
fn dao_deserializes_with_token_metadata() {
    let raw = r#"{
        "id": "0xe237747055b12f4da323bc559ac8d5eb66aac2f7",
        "token": { "name": "PMTest", "symbol": "PMT" }
    }"#;
    let dao: Dao = serde_json::from_str(raw).unwrap();
    assert_eq!(dao.token.name, "PMTest");
    assert_eq!(dao.token.symbol, "PMT");
}
