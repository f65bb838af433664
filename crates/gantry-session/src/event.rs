//! Session events and state

use gantry_runtime::Token;
use serde::{Deserialize, Serialize};

/// Tagged login/logout signal emitted by the UI runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    LoggedIn(Token),
    LoggedOut,
}

/// Authentication state for the current page session.
///
/// Not persisted; durable storage owns the token and this is re-derived
/// from it at every startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Anonymous,
    Authenticated(Token),
}

impl SessionState {
    /// State corresponding to a persisted token read at startup
    pub fn from_token(token: Option<Token>) -> Self {
        match token {
            Some(token) => Self::Authenticated(token),
            None => Self::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(token) => Some(token),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_token() {
        assert_eq!(SessionState::from_token(None), SessionState::Anonymous);

        let state = SessionState::from_token(Some("abc123".to_string()));
        assert_eq!(state.token(), Some("abc123"));
        assert!(state.is_authenticated());
    }
}
