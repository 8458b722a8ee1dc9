use super::*;

#[test]
fn mod_endpoint_formats_expected_path() {
    assert_eq!(mod_endpoint(12), "/api/mods/12");
}
