use super::*;

#[test]
fn container_endpoint_formats_expected_path() {
    assert_eq!(container_endpoint("abc123"), "/api/containers/abc123");
}

#[test]
fn start_endpoint_formats_expected_path() {
    assert_eq!(start_endpoint("abc123"), "/api/containers/abc123/start");
}

#[test]
fn stop_endpoint_carries_timeout_query_parameter() {
    assert_eq!(
        stop_endpoint("abc123", DEFAULT_STOP_TIMEOUT_SECS),
        "/api/containers/abc123/stop?timeout=10"
    );
    assert_eq!(stop_endpoint("abc123", 30), "/api/containers/abc123/stop?timeout=30");
}

#[test]
fn logs_endpoint_carries_lines_query_parameter() {
    assert_eq!(
        logs_endpoint("abc123", DEFAULT_LOG_LINES),
        "/api/containers/abc123/logs?lines=100"
    );
}
