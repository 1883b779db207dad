use std::{error::Error, fmt::Display};

pub type FrontendResult<T> = Result<T, FrontendError>;

/// Why a content fetch did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendError {
    /// The backend answered with a non-2xx status. All such statuses mean "not found".
    NotFound { status: u16 },
    /// No response was received, eg the host is unreachable or DNS lookup failed.
    Transport(String),
    /// The backend answered successfully but the body is not the expected JSON.
    Malformed(String),
}

impl Display for FrontendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { status } => write!(f, "not found (status {status})"),
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::Malformed(e) => write!(f, "invalid response: {e}"),
        }
    }
}

impl Error for FrontendError {}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for FrontendError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for FrontendError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for FrontendError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}
