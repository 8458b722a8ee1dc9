use super::*;

#[test]
fn generate_slug_lowercases_and_joins_with_dashes() {
    assert_eq!(generate_slug("Survival World"), "survival-world");
    assert_eq!(generate_slug("  ARK: The Island  "), "ark-the-island");
    assert_eq!(generate_slug("7 Days to Die"), "7-days-to-die");
}

#[test]
fn generate_slug_collapses_symbol_runs_and_trims_edges() {
    assert_eq!(generate_slug("--my!! server--"), "my-server");
    assert_eq!(generate_slug("***"), "");
}

#[test]
fn slug_validity_rules() {
    assert!(slug_is_valid("mc-survival"));
    assert!(slug_is_valid("a1"));
    assert!(!slug_is_valid(""));
    assert!(!slug_is_valid("-leading"));
    assert!(!slug_is_valid("trailing-"));
    assert!(!slug_is_valid("double--dash"));
    assert!(!slug_is_valid("Upper-Case"));
    assert!(!slug_is_valid("under_score"));
}

#[test]
fn generated_slugs_are_always_valid_or_empty() {
    for name in ["Survival World", "  ARK: The Island  ", "x", "!!!", "A--B"] {
        let slug = generate_slug(name);
        assert!(slug.is_empty() || slug_is_valid(&slug), "bad slug {slug:?} from {name:?}");
    }
}

#[test]
fn validate_server_input_requires_a_real_name() {
    assert_eq!(
        validate_server_input("ab", "ab", "minecraft", ""),
        Err("Name must be at least 3 characters")
    );
}

#[test]
fn validate_server_input_rejects_bad_slugs_and_unknown_games() {
    assert!(validate_server_input("Survival", "Bad Slug", "minecraft", "").is_err());
    assert_eq!(
        validate_server_input("Survival", "survival", "doom", ""),
        Err("Choose a supported game")
    );
}

#[test]
fn validate_server_input_builds_payload_with_optional_description() {
    let request = validate_server_input(" Survival World ", "survival-world", "minecraft", "  ")
        .expect("input should validate");
    assert_eq!(request.name, "Survival World");
    assert_eq!(request.description, None);

    let request = validate_server_input("Survival World", "survival-world", "palworld", " pvp ")
        .expect("input should validate");
    assert_eq!(request.game, "palworld");
    assert_eq!(request.description.as_deref(), Some("pvp"));
}
