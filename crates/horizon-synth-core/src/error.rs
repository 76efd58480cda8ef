//! Error types for Horizon Synth core systems.

use std::fmt;

use crate::session::SessionId;

/// Session-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Nothing is installed for the session, or the installed value was dropped.
    NotInstalled(SessionId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled(id) => {
                write!(f, "No look-and-feel is installed for session {}", id.as_raw())
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A specialized Result type for Horizon Synth core operations.
pub type Result<T> = std::result::Result<T, SessionError>;
