use super::*;

#[test]
fn health_status_ok_when_configured() {
    let health = health_status(true);
    assert_eq!(health.status, "OK");
    assert!(health.message.contains("running"));
    assert!(!health.timestamp.is_empty());
}

#[test]
fn health_status_degraded_without_credentials() {
    let health = health_status(false);
    assert_eq!(health.status, "DEGRADED");
    assert!(health.message.contains("credentials"));
}
