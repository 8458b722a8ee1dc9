use super::*;

#[test]
fn secret_env_values_are_masked() {
    let env = GameServerEnv {
        key: "RCON_PASSWORD".to_owned(),
        value: Some("hunter2".to_owned()),
        is_secret: true,
    };
    assert_eq!(display_env_value(&env), "••••••••");
}

#[test]
fn plain_env_values_render_verbatim() {
    let env = GameServerEnv {
        key: "EULA".to_owned(),
        value: Some("TRUE".to_owned()),
        is_secret: false,
    };
    assert_eq!(display_env_value(&env), "TRUE");
}

#[test]
fn missing_env_values_render_empty() {
    let env = GameServerEnv { key: "OPTIONAL".to_owned(), value: None, is_secret: false };
    assert_eq!(display_env_value(&env), "");
}

#[test]
fn server_ports_render_host_and_container_sides() {
    let port = GameServerPort { host_port: 25565, container_port: 25565, protocol: "tcp".to_owned() };
    assert_eq!(format_server_port(&port), "25565 → 25565/tcp");
}

#[test]
fn update_input_requires_a_real_name() {
    assert_eq!(validate_update_input("ab"), Err("Name must be at least 3 characters"));
    assert_eq!(validate_update_input("  ab  "), Err("Name must be at least 3 characters"));
    assert_eq!(validate_update_input("Survival"), Ok(()));
}

#[test]
fn update_request_always_carries_both_fields() {
    let request = build_update_request(" Survival ", "");
    assert_eq!(request.name.as_deref(), Some("Survival"));
    assert_eq!(request.description.as_deref(), Some(""));
}
