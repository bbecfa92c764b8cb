//! Backend connectivity state for the app-level banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` runs one health check on mount and provides this state via context;
//! the home page reads it to decide whether the assessment may start.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Message shown when the startup health check fails.
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Unable to connect to the backend API. Please ensure the server is running.";

/// Result of the startup health check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

#[derive(Clone, Debug, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    /// App-level error alert text, if any.
    pub error: Option<String>,
}

impl ConnectionState {
    pub fn mark_connected(&mut self) {
        self.status = ConnectionStatus::Connected;
    }

    pub fn mark_failed(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.error = Some(CONNECTION_FAILED_MESSAGE.to_owned());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Banner text while not connected; `None` hides the banner.
    pub fn banner_label(&self) -> Option<&'static str> {
        match self.status {
            ConnectionStatus::Checking => Some("Connecting to server..."),
            ConnectionStatus::Disconnected => Some("Server connection failed"),
            ConnectionStatus::Connected => None,
        }
    }
}
