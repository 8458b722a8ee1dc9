use super::*;

#[test]
fn port_mapping_renders_host_and_container_sides() {
    let port = PortMapping {
        host_ip: Some("127.0.0.1".to_owned()),
        host_port: 25565,
        container_port: 25565,
        protocol: "tcp".to_owned(),
    };
    assert_eq!(format_port_mapping(&port), "127.0.0.1:25565 → 25565/tcp");
}

#[test]
fn port_mapping_defaults_to_the_wildcard_host() {
    let port = PortMapping {
        host_ip: None,
        host_port: 8080,
        container_port: 80,
        protocol: "tcp".to_owned(),
    };
    assert_eq!(format_port_mapping(&port), "0.0.0.0:8080 → 80/tcp");
}

#[test]
fn stderr_lines_get_their_own_class() {
    assert_eq!(log_entry_class("stderr"), "log-line log-line--stderr");
    assert_eq!(log_entry_class("stdout"), "log-line log-line--stdout");
    // Unknown streams render like stdout rather than disappearing.
    assert_eq!(log_entry_class("weird"), "log-line log-line--stdout");
}
