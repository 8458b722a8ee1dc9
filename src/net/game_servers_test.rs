use super::*;

#[test]
fn server_endpoint_formats_expected_path() {
    assert_eq!(server_endpoint("mc-survival"), "/api/game-servers/mc-survival");
}

#[test]
fn list_and_create_share_the_collection_path() {
    assert_eq!(BASE, "/api/game-servers");
}
