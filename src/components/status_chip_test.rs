use super::*;

#[test]
fn running_states_map_to_ok() {
    assert_eq!(container_state_modifier(ContainerState::Running), "ok");
    assert_eq!(game_server_status_modifier(GameServerStatus::Running), "ok");
}

#[test]
fn transitional_states_map_to_busy() {
    assert_eq!(container_state_modifier(ContainerState::Paused), "busy");
    assert_eq!(container_state_modifier(ContainerState::Restarting), "busy");
    assert_eq!(game_server_status_modifier(GameServerStatus::Creating), "busy");
}

#[test]
fn resting_states_map_to_idle() {
    assert_eq!(container_state_modifier(ContainerState::Stopped), "idle");
    assert_eq!(container_state_modifier(ContainerState::Exited), "idle");
    assert_eq!(container_state_modifier(ContainerState::Unknown), "idle");
    assert_eq!(game_server_status_modifier(GameServerStatus::Stopped), "idle");
}

#[test]
fn error_status_maps_to_err() {
    assert_eq!(game_server_status_modifier(GameServerStatus::Error), "err");
}
