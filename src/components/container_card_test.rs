use super::*;

#[test]
fn resting_states_can_start() {
    assert!(can_start(ContainerState::Stopped));
    assert!(can_start(ContainerState::Created));
    assert!(can_start(ContainerState::Exited));
    assert!(!can_start(ContainerState::Running));
    assert!(!can_start(ContainerState::Unknown));
}

#[test]
fn active_states_can_stop() {
    assert!(can_stop(ContainerState::Running));
    assert!(can_stop(ContainerState::Restarting));
    assert!(can_stop(ContainerState::Paused));
    assert!(!can_stop(ContainerState::Stopped));
    assert!(!can_stop(ContainerState::Exited));
}

#[test]
fn ports_summary_lists_host_ports_with_protocols() {
    let ports = vec![
        PortMapping { host_ip: None, host_port: 25565, container_port: 25565, protocol: "tcp".to_owned() },
        PortMapping { host_ip: None, host_port: 25575, container_port: 25575, protocol: "udp".to_owned() },
    ];
    assert_eq!(ports_summary(&ports), "25565/tcp, 25575/udp");
}

#[test]
fn ports_summary_handles_unpublished_containers() {
    assert_eq!(ports_summary(&[]), "no published ports");
}
