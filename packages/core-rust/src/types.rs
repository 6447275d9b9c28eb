use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Outcome reported by a legacy operation to its completion handler.
///
/// Exactly one variant is present per report. Serializes internally tagged
/// under `"tag"`, so the JSON forms are `{"tag":"success","payload":...}` and
/// `{"tag":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub enum TaggedResult<T> {
    /// The operation produced its payload.
    Success {
        /// Data the operation was asked for.
        payload: T,
    },
    /// The operation failed with a human-readable reason.
    Error {
        /// Reason for the failure.
        message: String,
    },
}

impl<T> TaggedResult<T> {
    /// Builds a success report.
    pub fn success(payload: T) -> Self {
        Self::Success { payload }
    }

    /// Builds an error report.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Converts into a `Result`, keeping the error message as the `Err` value.
    ///
    /// # Errors
    ///
    /// Returns the carried message for the `Error` variant.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { payload } => Ok(payload),
            Self::Error { message } => Err(message),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for TaggedResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Success { payload },
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}
