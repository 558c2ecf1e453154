//! Failure taxonomy for session and auth requests.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse failure class recorded in view state once a request has failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The server rejected the request or no valid session exists.
    NotAuthenticated,
    /// Network failure, timeout, or an undecodable response body.
    Transport,
    /// The response decoded but carried no usable identity.
    Malformed,
}

/// Errors produced by session API operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The identity endpoint answered with a non-success status.
    #[error("not authenticated: status {status}")]
    NotAuthenticated { status: u16 },

    /// An auth endpoint answered with a non-success status.
    #[error("request rejected: status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a usable HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The identity payload held no display name.
    #[error("malformed identity payload: {0}")]
    Malformed(String),
}

impl SessionError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated { .. } => "E_NOT_AUTHENTICATED",
            Self::Rejected { .. } => "E_REJECTED",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Malformed(_) => "E_MALFORMED",
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotAuthenticated { .. } | Self::Rejected { .. } => FailureKind::NotAuthenticated,
            Self::Transport(_) => FailureKind::Transport,
            Self::Malformed(_) => FailureKind::Malformed,
        }
    }

    /// Short text suitable for an inline form message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::NotAuthenticated { .. } => "Not logged in.".to_owned(),
            Self::Transport(_) => "Could not reach the server. Try again.".to_owned(),
            Self::Malformed(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}
