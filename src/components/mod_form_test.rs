use super::*;

#[test]
fn validate_mod_input_requires_name_and_slug() {
    assert_eq!(validate_mod_input("", "worldedit"), Err("Name is required"));
    assert_eq!(validate_mod_input("   ", "worldedit"), Err("Name is required"));
    assert_eq!(validate_mod_input("WorldEdit", ""), Err("Slug is required"));
    assert_eq!(validate_mod_input("WorldEdit", "worldedit"), Ok(()));
}

#[test]
fn build_create_request_trims_and_drops_empty_optionals() {
    let request = build_create_request(" WorldEdit ", " worldedit ", "", "  ", " 7.3.0 ");
    assert_eq!(request.name, "WorldEdit");
    assert_eq!(request.slug, "worldedit");
    assert_eq!(request.description, None);
    assert_eq!(request.source_url, None);
    assert_eq!(request.version.as_deref(), Some("7.3.0"));
}

#[test]
fn build_update_request_always_carries_name_and_slug() {
    let request = build_update_request("WorldEdit", "worldedit", "editing tool", "", "");
    assert_eq!(request.name.as_deref(), Some("WorldEdit"));
    assert_eq!(request.slug.as_deref(), Some("worldedit"));
    assert_eq!(request.description.as_deref(), Some("editing tool"));
    assert_eq!(request.source_url, None);
    assert_eq!(request.version, None);
}
