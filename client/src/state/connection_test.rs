use super::*;

#[test]
fn connection_state_starts_checking_without_error() {
    let state = ConnectionState::default();
    assert_eq!(state.status, ConnectionStatus::Checking);
    assert!(state.error.is_none());
    assert!(!state.is_connected());
    assert_eq!(state.banner_label(), Some("Connecting to server..."));
}

#[test]
fn mark_connected_hides_banner() {
    let mut state = ConnectionState::default();
    state.mark_connected();
    assert!(state.is_connected());
    assert_eq!(state.banner_label(), None);
}

#[test]
fn mark_failed_sets_banner_and_error() {
    let mut state = ConnectionState::default();
    state.mark_failed();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    assert_eq!(state.banner_label(), Some("Server connection failed"));
    assert_eq!(state.error.as_deref(), Some(CONNECTION_FAILED_MESSAGE));
}

#[test]
fn clear_error_keeps_status() {
    let mut state = ConnectionState::default();
    state.mark_failed();
    state.clear_error();
    assert!(state.error.is_none());
    assert_eq!(state.status, ConnectionStatus::Disconnected);
}
