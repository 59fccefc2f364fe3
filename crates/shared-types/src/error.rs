use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A role string that is not part of the closed [`crate::Role`] set.
///
/// Never defaulted: the caller decides what an unrecognized identity means.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("unknown role `{role}`")]
pub struct UnknownRoleError {
    pub role: String,
}

impl UnknownRoleError {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// Session-scoped state was read before its owning scope was established,
/// or after it was torn down.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{context} accessed outside of an active session")]
pub struct ContextNotInitializedError {
    pub context: &'static str,
}

impl ContextNotInitializedError {
    pub const fn new(context: &'static str) -> Self {
        Self { context }
    }
}

/// Failure reported by a statistic's data-fetch transport.
///
/// Stored on the failing statistic only; it is never returned from the
/// aggregator's bulk operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("failed to load statistic: {message}")]
pub struct StatFetchError {
    pub message: String,
}

impl StatFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap any displayable transport error.
    pub fn from_display(err: impl std::fmt::Display) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_display_names_the_role() {
        let err = UnknownRoleError::new("janitor");
        assert_eq!(err.to_string(), "unknown role `janitor`");
    }

    #[test]
    fn context_error_display_names_the_context() {
        let err = ContextNotInitializedError::new("view router");
        assert_eq!(
            err.to_string(),
            "view router accessed outside of an active session"
        );
    }

    #[test]
    fn stat_fetch_error_wraps_display() {
        let err = StatFetchError::from_display("connection reset");
        assert_eq!(err.message, "connection reset");
        assert_eq!(err.to_string(), "failed to load statistic: connection reset");
    }

    #[test]
    fn stat_fetch_error_roundtrip_through_json() {
        let err = StatFetchError::new("HTTP 503");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: StatFetchError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
