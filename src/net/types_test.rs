use super::*;

#[test]
fn container_decodes_backend_json() {
    let json = r#"{
        "id": "abc123",
        "name": "mc-survival",
        "image": "itzg/minecraft-server:latest",
        "state": "running",
        "status": "Up 3 hours",
        "created": "2025-11-02T10:00:00Z",
        "ports": [
            {"hostIp": "0.0.0.0", "hostPort": 25565, "containerPort": 25565, "protocol": "tcp"},
            {"hostPort": 25575, "containerPort": 25575, "protocol": "udp"}
        ],
        "labels": {"sabakan.managed": "true"}
    }"#;

    let container: Container = serde_json::from_str(json).expect("container should decode");
    assert_eq!(container.state, ContainerState::Running);
    assert_eq!(container.ports.len(), 2);
    assert_eq!(container.ports[0].host_ip.as_deref(), Some("0.0.0.0"));
    assert_eq!(container.ports[1].host_ip, None);
    assert_eq!(container.labels.get("sabakan.managed").map(String::as_str), Some("true"));
}

#[test]
fn container_without_ports_or_labels_decodes_to_empty_collections() {
    let json = r#"{
        "id": "x",
        "name": "n",
        "image": "i",
        "state": "exited",
        "status": "Exited (0)",
        "created": "2025-11-02T10:00:00Z"
    }"#;

    let container: Container = serde_json::from_str(json).expect("container should decode");
    assert!(container.ports.is_empty());
    assert!(container.labels.is_empty());
}

#[test]
fn unrecognized_container_state_maps_to_unknown() {
    let state: ContainerState = serde_json::from_str(r#""dead""#).expect("state should decode");
    assert_eq!(state, ContainerState::Unknown);
}

#[test]
fn game_server_decodes_record_fields_with_uppercase_names() {
    let json = r#"{
        "ID": 3,
        "CreatedAt": "2025-11-01T09:00:00Z",
        "UpdatedAt": "2025-11-02T09:00:00Z",
        "slug": "mc-survival",
        "name": "Survival World",
        "image": "itzg/minecraft-server:latest",
        "status": "stopped",
        "ownerId": 7,
        "ports": [{"hostPort": 25565, "containerPort": 25565, "protocol": "tcp"}],
        "envs": [{"key": "RCON_PASSWORD", "value": "hunter2", "isSecret": true}]
    }"#;

    let server: GameServer = serde_json::from_str(json).expect("game server should decode");
    assert_eq!(server.id, 3);
    assert_eq!(server.owner_id, 7);
    assert_eq!(server.status, GameServerStatus::Stopped);
    assert_eq!(server.container_id, None);
    assert!(server.envs[0].is_secret);
}

#[test]
fn mod_decodes_optional_fields_as_none_when_absent() {
    let json = r#"{
        "ID": 12,
        "CreatedAt": "2025-11-01T09:00:00Z",
        "UpdatedAt": "2025-11-01T09:00:00Z",
        "name": "WorldEdit",
        "slug": "worldedit"
    }"#;

    let entry: Mod = serde_json::from_str(json).expect("mod should decode");
    assert_eq!(entry.id, 12);
    assert_eq!(entry.description, None);
    assert_eq!(entry.source_url, None);
    assert_eq!(entry.version, None);
}

#[test]
fn auth_response_refresh_token_is_optional() {
    let json = r#"{"access_token": "a.b.c", "expires_in": 900, "token_type": "Bearer"}"#;
    let response: AuthResponse = serde_json::from_str(json).expect("auth response should decode");
    assert_eq!(response.refresh_token, None);

    let json = r#"{"access_token": "a.b.c", "refresh_token": "r", "expires_in": 900, "token_type": "Bearer"}"#;
    let response: AuthResponse = serde_json::from_str(json).expect("auth response should decode");
    assert_eq!(response.refresh_token.as_deref(), Some("r"));
}

#[test]
fn update_requests_skip_unset_fields() {
    let update = UpdateGameServerRequest { name: Some("New name".to_owned()), description: None };
    assert_eq!(
        serde_json::to_value(&update).expect("serialize"),
        serde_json::json!({"name": "New name"})
    );

    let update = UpdateModRequest { version: Some("1.2.0".to_owned()), ..UpdateModRequest::default() };
    assert_eq!(
        serde_json::to_value(&update).expect("serialize"),
        serde_json::json!({"version": "1.2.0"})
    );
}

#[test]
fn create_mod_request_serializes_source_url_in_camel_case() {
    let create = CreateModRequest {
        name: "WorldEdit".to_owned(),
        slug: "worldedit".to_owned(),
        description: None,
        source_url: Some("https://example.com/worldedit".to_owned()),
        version: None,
    };
    assert_eq!(
        serde_json::to_value(&create).expect("serialize"),
        serde_json::json!({
            "name": "WorldEdit",
            "slug": "worldedit",
            "sourceUrl": "https://example.com/worldedit"
        })
    );
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{"error": "not_found"}"#).expect("decode");
    assert_eq!(body.message, None);
}
