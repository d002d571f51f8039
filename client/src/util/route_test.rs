use super::*;

#[test]
fn valid_segments_parse() {
    let (chain_id, dao) = parse_dao_route(
        Some("31337"),
        Some("0xe237747055b12f4da323bc559ac8d5eb66aac2f7"),
    )
    .unwrap();
    assert_eq!(chain_id, 31337);
    assert_eq!(
        dao.to_string().to_lowercase(),
        "0xe237747055b12f4da323bc559ac8d5eb66aac2f7"
    );
}

#[test]
fn missing_or_malformed_segments_yield_none() {
    assert!(parse_dao_route(None, Some("0x00")).is_none());
    assert!(parse_dao_route(Some("31337"), None).is_none());
    assert!(parse_dao_route(Some("abc"), Some("0xe237747055b12f4da323bc559ac8d5eb66aac2f7")).is_none());
    assert!(parse_dao_route(Some("31337"), Some("not-an-address")).is_none());
}
