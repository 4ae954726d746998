use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a request to the people service did not produce usable data.
///
/// Both variants take the same handling path: a diagnostic log record,
/// state left as teardown set it, no retry and nothing shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("decode failure: {0}")]
    Decode(String),
}

impl FetchError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
